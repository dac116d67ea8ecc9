//! Error types for frame output.

use std::io;
use thiserror::Error;

/// Frame I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// PNG encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Buffer size does not match the frame dimensions.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: String,
        /// Actual size.
        actual: String,
    },

    /// Unsupported PNG layout.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for frame I/O operations.
pub type IoResult<T> = Result<T, IoError>;
