//! Error types for registry attribution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rewriting attribution fields.
///
/// Every variant is fatal for a run: nothing retries, and files already
/// rewritten earlier in the same run are left as they are.
#[derive(Debug, Error)]
pub enum AttributionError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document {}: {reason}", path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AttributionError {
    /// Map an I/O failure on read to `FileNotFound` or `ReadError`.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AttributionError::FileNotFound { path }
        } else {
            AttributionError::ReadError { path, source }
        }
    }

    pub fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AttributionError::InvalidDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for AttributionError {
    fn from(err: config::ConfigError) -> Self {
        AttributionError::ConfigError(err.to_string())
    }
}
