//! Error types for hitlog-store

use std::path::PathBuf;
use thiserror::Error;

/// Store error type
#[derive(Debug, Error)]
pub enum Error {
    /// Log file has never been created
    #[error("log file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File could not be created, opened, written or parsed
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Whether this error means the log does not exist yet
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
