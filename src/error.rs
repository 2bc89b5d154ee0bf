use thiserror::Error;

/// Errors that can occur when using the collections in this crate
///
/// Container lookups never fail: a missing key or index is reported as `None`.
/// Only JSON conversion and the statistics functions produce errors.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The input was not a JSON document compatible with the container's value type,
    /// or a value could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The operation needs at least one element
    #[error("cannot calculate {operation} of an empty sequence")]
    EmptyInput { operation: &'static str },
    /// The operation needs more elements than were supplied
    #[error("{operation} requires at least {required} elements, got {actual}")]
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },
    /// Percentiles are expressed as a fraction between 0 and 1
    #[error("percentile must be between 0 and 1, got {0}")]
    InvalidPercentile(f64),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, CollectionError>;
