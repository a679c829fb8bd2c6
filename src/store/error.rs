//! Unified error type for storage collaborators.

use thiserror::Error;

/// Errors surfaced by a [`crate::store::Collection`] implementation.
///
/// The soft-delete layer never catches or retries these; they propagate to the
/// caller unmodified.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Invalid document path: {0}")]
    InvalidPath(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create a not found error
    pub fn not_found(what: impl Into<String>) -> Self {
        StoreError::NotFound(what.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        StoreError::InvalidPath(path.into())
    }
}
