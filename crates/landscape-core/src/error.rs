//! Error types for the landscape core.

use thiserror::Error;

/// Errors raised by state mutation and the render pipeline.
///
/// The first three variants are contract violations: the shell only ever offers
/// catalog names and fixed tuning, so seeing one means a caller bug.
#[derive(Error, Debug)]
pub enum LandscapeError {
    /// An emotion name that is not part of the fixed catalog.
    #[error("unknown emotion '{0}'")]
    UnknownEmotion(String),

    /// A mesh resolution that cannot span an axis.
    #[error("degenerate mesh resolution {resolution}: need at least {min} samples per axis")]
    DegenerateResolution { resolution: usize, min: usize },

    /// A tuning value that would make the radius field undefined.
    #[error("invalid pipeline parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The renderer rejected a frame.
    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

/// A specialized Result type for landscape operations.
pub type Result<T> = std::result::Result<T, LandscapeError>;
