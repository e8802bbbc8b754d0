//! Error types for dxfslim

use thiserror::Error;

/// Main error type for dxfslim operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Drawing parse error: {0}")]
    Parse(String),

    #[error("Drawing write error: {0}")]
    Write(String),

    #[error("Malformed percent value: {0}")]
    MalformedPercent(String),

    #[error("Unsupported filename: {0}")]
    UnsupportedFilename(String),
}

/// Result type alias for dxfslim operations
pub type Result<T> = std::result::Result<T, Error>;
