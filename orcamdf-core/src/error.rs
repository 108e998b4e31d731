//! Error types for quote storage and validation.
//!
//! The estimation engine itself is total over its input domain and never
//! returns an error; everything here belongs to the surrounding storage and
//! validation layers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading and saving quote data.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("JSON encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for storage and validation operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
