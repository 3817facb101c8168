//! Error types for the head pose estimation library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Landmark set too short to address the configured reference indices
    #[error("insufficient landmarks: need at least {required}, got {actual}")]
    InsufficientLandmarks {
        /// Minimum number of landmarks required by the reference indices
        required: usize,
        /// Number of landmarks actually supplied
        actual: usize,
    },

    /// Reference points coincident or collinear, basis normalization undefined
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
