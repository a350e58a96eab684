//! Error types for the store layer.

use edgekv_codec::CodecError;
use edgekv_storage::StoreError;
use thiserror::Error;

/// Result type for store operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors surfaced by the store layer.
///
/// The store adds no failure modes of its own; everything is either a
/// backend error or a codec error propagated unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A backend operation failed.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// Encoding or decoding a payload failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl CoreError {
    /// Returns `true` if this is the expected-absence case of a get on
    /// a missing key.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StoreError::NotFound))
    }
}
