//! Error types for telemetry operations.

use thiserror::Error;

/// Errors that can occur while loading or selecting telemetry.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to load session data.
    #[error("failed to load session: {0}")]
    LoadError(String),

    /// A lap record is malformed.
    #[error("invalid lap record: {0}")]
    InvalidLap(String),

    /// The requested driver is not in the session.
    #[error("unknown driver: {0}")]
    UnknownDriver(String),

    /// Invalid model input.
    #[error(transparent)]
    Model(#[from] stint_model::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// CSV parsing error.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type alias for telemetry operations.
pub type Result<T> = std::result::Result<T, Error>;
