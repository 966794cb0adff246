use std::io;

/// All error types for geoframe.
///
/// The conversion functions themselves are total and never fail; these
/// errors come from opt-in validation, CLI input and file I/O.
#[derive(thiserror::Error, Debug)]
pub enum GeoFrameError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("Input error: {0}")]
    Input(String),
    #[error("Output error: {0}")]
    Output(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoFrameError>;
