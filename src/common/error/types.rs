//! Unified error types for launchkit.
//!
//! Rendering, packaging and export failures share one error type so that the
//! callers (assembler wrapper, export, HTTP layer) can handle them uniformly.
use thiserror::Error;

/// Main error type for launchkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Slide content that cannot be represented in the output document
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Base64 transport decoding failed
    #[error("Base64 error: {0}")]
    Base64(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Requested export has nothing to export
    #[error("No content available: {0}")]
    NoContent(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for launchkit operations.
pub type Result<T> = std::result::Result<T, Error>;
