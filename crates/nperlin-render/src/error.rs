//! Error types for rendering.

use thiserror::Error;

/// Rendering error.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Invalid configuration value.
    #[error(transparent)]
    Config(#[from] nperlin_core::Error),

    /// Configuration file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A finished frame could not be written.
    #[error("output error: {0}")]
    Output(#[from] nperlin_io::IoError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
