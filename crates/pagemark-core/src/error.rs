//! Error types for PageMark core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in PageMark core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An emoji codepoint segment is not valid hexadecimal or not a Unicode scalar.
    #[error("Invalid emoji codepoint: {0}")]
    InvalidCodepoint(String),

    /// The page store rejected a logo update.
    #[error("Logo update failed: {0}")]
    UpdateFailed(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system operation failed.
    #[error("File system error at {path}: {message}")]
    FileSystem {
        /// Path where the error occurred.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
