//! Error types for backend operations.

use std::io;
use thiserror::Error;

/// Result type for backend operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during backend operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested key is not present in the backend.
    ///
    /// This is an expected, non-fatal outcome of any get-like call;
    /// it is never reported as an empty success.
    #[error("key not found")]
    NotFound,

    /// An I/O error occurred while opening, reading, or writing the
    /// backing file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The wrapped storage engine reported a failure.
    #[error("storage engine error: {0}")]
    Engine(redb::Error),

    /// The backend does not support the requested operation.
    ///
    /// Fixed and non-retryable, e.g. `query` on the in-memory backend.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// Name of the unsupported operation.
        operation: String,
    },

    /// The backend has been closed.
    #[error("backend is closed")]
    Closed,
}

impl StoreError {
    /// Create an unsupported operation error.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Returns `true` if this error is the expected-absence case.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

// Engine I/O failures surface as `Io` so callers see one error kind for
// "the file could not be read or written", whichever layer noticed it.
impl From<redb::Error> for StoreError {
    fn from(err: redb::Error) -> Self {
        match err {
            redb::Error::Io(io_err) => Self::Io(io_err),
            other => Self::Engine(other),
        }
    }
}

impl From<redb::DatabaseError> for StoreError {
    fn from(err: redb::DatabaseError) -> Self {
        Self::from(redb::Error::from(err))
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(err: redb::TransactionError) -> Self {
        Self::from(redb::Error::from(err))
    }
}

impl From<redb::TableError> for StoreError {
    fn from(err: redb::TableError) -> Self {
        Self::from(redb::Error::from(err))
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(err: redb::StorageError) -> Self {
        Self::from(redb::Error::from(err))
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(err: redb::CommitError) -> Self {
        Self::from(redb::Error::from(err))
    }
}
