//! Error types for simulation operations.

use thiserror::Error;

/// Errors that can occur during a gap simulation.
#[derive(Debug, Error)]
pub enum Error {
    /// One or both lap-time series are empty, so no gap can be walked.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid model input.
    #[error(transparent)]
    Model(#[from] stint_model::Error),
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, Error>;
