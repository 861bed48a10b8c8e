//! Error types for stint model construction.

use thiserror::Error;

/// Errors raised when constructing model values.
#[derive(Debug, Error)]
pub enum Error {
    /// A lap time is negative, NaN, or infinite.
    #[error("invalid lap time at index {index}: {value}")]
    InvalidLapTime {
        /// Zero-based index of the offending lap within the series.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Lap numbering starts at 1; a start lap of 0 is meaningless.
    #[error("start lap must be positive, got {0}")]
    NonPositiveStartLap(u32),

    /// A penalty parameter is negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativePenalty {
        /// Name of the offending parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A parameter is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Result type alias for stint model operations.
pub type Result<T> = std::result::Result<T, Error>;
