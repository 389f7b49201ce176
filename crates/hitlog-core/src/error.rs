//! Error types for hitlog-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// Event log error (missing or unreadable)
    #[error(transparent)]
    Store(#[from] hitlog_store::Error),

    /// Prompt serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether the log has never been created
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(e) if e.is_not_found())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
