// Shared tuning constants for the landscape pipeline, camera and shell.

// Mesh resolution (samples per axis)
pub const MESH_DENSITY_SETTLED: usize = 100; // full quality when nothing is moving
pub const MESH_DENSITY_INTERACTIVE: usize = 50; // while dragging or auto-rotating
pub const MESH_DENSITY_MIN: usize = 2; // fewer samples cannot span an axis

// Deformation kernel
pub const BUMP_SIGMA: f64 = 0.4; // radians
pub const AMPLITUDE_PER_COUNT: f64 = 0.2; // radius gained per click at the anchor
pub const BASE_RADIUS: f64 = 1.0;

// Camera defaults and limits (degrees)
pub const DEFAULT_ELEVATION: f64 = 30.0;
pub const DEFAULT_AZIMUTH: f64 = 45.0;
pub const ELEVATION_MIN: f64 = 0.0;
pub const ELEVATION_MAX: f64 = 180.0;
pub const AZIMUTH_PERIOD: f64 = 360.0;

// Auto-rotate sweep
pub const AUTO_ROTATE_STEP: f64 = 0.05; // phase advance per tick
pub const AUTO_ROTATE_INTERVAL_MS: u64 = 50;
pub const AUTO_ROTATE_AZIMUTH_RATE: f64 = 50.0; // degrees per unit phase
pub const AUTO_ROTATE_ELEVATION_BASE: f64 = 30.0;
pub const AUTO_ROTATE_ELEVATION_SWING: f64 = 45.0;

// Shell interaction
pub const CAMERA_NUDGE_DEG: f64 = 5.0; // arrow-key step
pub const SETTLE_DELAY_MS: u64 = 250; // coarse frame -> fine frame after a nudge

// Presentation
pub const SURFACE_ALPHA: f32 = 0.9;
pub const LANDSCAPE_TITLE: &str = "Emotional Landscape";
pub const WINDOW_TITLE: &str = "Interactive Emotion Visualizer";
pub const WINDOW_SIZE: [f64; 2] = [1200.0, 800.0];

// Camera framing: eye distance as a multiple of the mesh's largest radius
pub const CAMERA_DISTANCE_PER_RADIUS: f32 = 3.2;
pub const CAMERA_FOVY_DEG: f32 = 40.0;
