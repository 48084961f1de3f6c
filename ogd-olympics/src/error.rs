/// Error types for the Olympic data library
use thiserror::Error;

/// Main error type for dataset loading operations
#[derive(Error, Debug)]
pub enum OlympicError {
    /// HTTP request failed
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    /// Failed to parse dataset JSON
    #[error("Failed to parse dataset JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Type alias for Results using OlympicError
pub type Result<T> = std::result::Result<T, OlympicError>;
