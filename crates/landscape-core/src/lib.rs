pub mod camera;
pub mod constants;
pub mod emotion;
pub mod error;
pub mod field;
pub mod input;
pub mod mesh;
pub mod pipeline;
pub mod rotate;
pub mod session;
pub mod state;
pub mod theme;
pub static LANDSCAPE_WGSL: &str = include_str!("../shaders/landscape.wgsl");

pub use camera::*;
pub use constants::*;
pub use emotion::*;
pub use error::*;
pub use pipeline::*;
pub use rotate::*;
pub use session::*;
pub use state::*;
pub use theme::*;
