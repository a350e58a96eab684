//! In-memory backend for tests and ephemeral stores.

use crate::backend::{KvBackend, QueryMode};
use crate::error::{StoreError, StoreResult};
use std::collections::{BTreeMap, HashMap};

/// An in-memory key/value backend.
///
/// Records live in a hash map and do not survive the process. Key
/// ordering is undefined, so [`query`](KvBackend::query) is not
/// supported. Suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral stores that don't need persistence
///
/// # Thread Safety
///
/// There is no internal synchronization. The `&mut self` receivers on
/// mutating operations force callers to serialize concurrent mutation
/// externally.
///
/// # Example
///
/// ```rust
/// use edgekv_storage::{KvBackend, MemoryBackend};
///
/// let mut backend = MemoryBackend::new();
/// backend.put(b"edge", b"payload").unwrap();
/// assert_eq!(backend.get(b"edge").unwrap(), b"payload");
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: HashMap<Vec<u8>, Vec<u8>>,
}

impl MemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the backend holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the underlying record map.
    ///
    /// Useful for tests and debugging.
    #[must_use]
    pub fn records(&self) -> &HashMap<Vec<u8>, Vec<u8>> {
        &self.records
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &[u8]) -> StoreResult<Vec<u8>> {
        self.records.get(key).cloned().ok_or(StoreError::NotFound)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        self.records.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) {
        self.records.remove(key);
    }

    fn query(&self, _anchor: &[u8], _mode: QueryMode) -> StoreResult<BTreeMap<Vec<u8>, Vec<u8>>> {
        // No defined key ordering to scan over.
        Err(StoreError::unsupported("query"))
    }

    fn close(&mut self) -> StoreResult<()> {
        // Nothing to release.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.len(), 0);
        assert!(backend.is_empty());
    }

    #[test]
    fn memory_put_then_get() {
        let mut backend = MemoryBackend::new();
        backend.put(b"carlo", b"locci").unwrap();

        assert_eq!(backend.get(b"carlo").unwrap(), b"locci");
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn memory_get_absent_reports_not_found() {
        let backend = MemoryBackend::new();
        let result = backend.get(b"ca");
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[test]
    fn memory_put_overwrites() {
        let mut backend = MemoryBackend::new();
        backend.put(b"key", b"first").unwrap();
        backend.put(b"key", b"second").unwrap();

        assert_eq!(backend.get(b"key").unwrap(), b"second");
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn memory_delete_removes_record() {
        let mut backend = MemoryBackend::new();
        backend.put(b"key", b"value").unwrap();
        backend.delete(b"key");

        assert!(backend.is_empty());
        assert!(matches!(backend.get(b"key"), Err(StoreError::NotFound)));
    }

    #[test]
    fn memory_delete_absent_is_silent() {
        let mut backend = MemoryBackend::new();
        backend.put(b"kept", b"value").unwrap();

        backend.delete(b"never-put");
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn memory_query_is_unsupported() {
        let backend = MemoryBackend::new();
        let result = backend.query(b"ca", QueryMode::Prefix);
        assert!(matches!(result, Err(StoreError::Unsupported { .. })));
    }

    #[test]
    fn memory_close_is_noop() {
        let mut backend = MemoryBackend::new();
        backend.put(b"key", b"value").unwrap();
        backend.close().unwrap();

        // Close released nothing; the records are still reachable.
        assert_eq!(backend.get(b"key").unwrap(), b"value");
    }

    #[test]
    fn memory_empty_key_and_value() {
        let mut backend = MemoryBackend::new();
        backend.put(b"", b"").unwrap();
        assert_eq!(backend.get(b"").unwrap(), b"");
    }
}
