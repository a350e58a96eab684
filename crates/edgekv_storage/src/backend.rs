//! Key/value backend trait definition.

use crate::error::StoreResult;
use std::collections::BTreeMap;

/// Match mode for [`KvBackend::query`].
///
/// The anchor passed to `query` is matched against stored keys as-is;
/// there is no sentinel character and no stripping. Callers state the
/// match mode explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Match keys that start with the anchor.
    Prefix,
    /// Match keys that end with the anchor.
    Suffix,
}

/// A key/value storage backend for EdgeKV.
///
/// Backends are **opaque byte stores**: keys and values are byte
/// sequences with no imposed type. Keys are unique per backend. Higher
/// layers own all value interpretation - backends never decode what
/// they store.
///
/// # Invariants
///
/// - `put` on an existing key overwrites the prior value
/// - `delete` of an absent key is a silent no-op, never a failure
/// - `get` of an absent key reports [`StoreError::NotFound`], never an
///   empty success
///
/// # Implementors
///
/// - [`super::MemoryBackend`] - mapping-based, no persistence
/// - [`super::FileBackend`] - durable, transactional, sorted
///
/// [`StoreError::NotFound`]: crate::StoreError::NotFound
pub trait KvBackend: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent, or an
    /// I/O / engine error if the read fails.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    fn get(&self, key: &[u8]) -> StoreResult<Vec<u8>>;

    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// On the file backend the replacement becomes atomically visible
    /// to transactions that begin after it commits.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn put(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()>;

    /// Removes `key` and its value.
    ///
    /// Deleting an absent key is a no-op: absence of the key is
    /// already-satisfied intent. This method cannot fail by contract,
    /// which the signature makes structural.
    fn delete(&mut self, key: &[u8]);

    /// Returns all records whose key matches `anchor` under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unsupported`] if the backend defines no
    /// key ordering, or an engine error if the scan fails.
    ///
    /// [`StoreError::Unsupported`]: crate::StoreError::Unsupported
    fn query(&self, anchor: &[u8], mode: QueryMode) -> StoreResult<BTreeMap<Vec<u8>, Vec<u8>>>;

    /// Releases the resources held by the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend was already closed or releasing
    /// its handle fails.
    fn close(&mut self) -> StoreResult<()>;
}
