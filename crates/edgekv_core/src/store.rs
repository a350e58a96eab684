//! The keyed store façade.

use crate::error::CoreResult;
use edgekv_codec::Payload;
use edgekv_storage::KvBackend;

/// A keyed collection bound to one externally supplied backend.
///
/// `Store` is the thin layer between typed values and a [`KvBackend`]:
/// string keys on the way in, [`Payload`] buffers on the way out. It
/// borrows the backend rather than owning it - the caller keeps the
/// backend and regains exclusive access (for `query`, `len`, `close`)
/// once the store is dropped, or mid-flight through
/// [`backend`](Store::backend).
///
/// Whether the records are graph edges or plain values is entirely up
/// to the caller; the store imposes no schema.
///
/// # Example
///
/// ```rust
/// use edgekv_core::Store;
/// use edgekv_codec::Payload;
/// use edgekv_storage::MemoryBackend;
///
/// let mut backend = MemoryBackend::new();
/// let mut store = Store::new(&mut backend);
///
/// let edge = Payload::from_value(&"ciao carlo").unwrap();
/// store.add("tar", &edge).unwrap();
///
/// let found = store.get("tar").unwrap();
/// let text: String = found.decode().unwrap();
/// assert_eq!(text, "ciao carlo");
/// ```
#[derive(Debug)]
pub struct Store<'b, B: KvBackend> {
    backend: &'b mut B,
}

impl<'b, B: KvBackend> Store<'b, B> {
    /// Binds a store to `backend`.
    pub fn new(backend: &'b mut B) -> Self {
        Self { backend }
    }

    /// Stores a payload's encoded buffer under `key`.
    ///
    /// # Errors
    ///
    /// Mirrors the backend's put error.
    pub fn add(&mut self, key: &str, payload: &Payload) -> CoreResult<()> {
        self.add_raw(key, payload.data())
    }

    /// Stores raw bytes under `key`.
    ///
    /// # Errors
    ///
    /// Mirrors the backend's put error.
    pub fn add_raw(&mut self, key: &str, value: &[u8]) -> CoreResult<()> {
        tracing::trace!(key, len = value.len(), "store add");
        self.backend.put(key.as_bytes(), value)?;
        Ok(())
    }

    /// Fetches the value under `key` wrapped in a fresh [`Payload`].
    ///
    /// # Errors
    ///
    /// Returns the backend's `NotFound` if the key is absent
    /// (detectable via [`CoreError::is_not_found`]), or any other
    /// backend error unchanged.
    ///
    /// [`CoreError::is_not_found`]: crate::CoreError::is_not_found
    pub fn get(&self, key: &str) -> CoreResult<Payload> {
        let bytes = self.backend.get(key.as_bytes())?;
        Ok(Payload::from_bytes(&bytes))
    }

    /// Deletes the record under `key`.
    ///
    /// A silent no-op if the key is absent, matching the backend
    /// contract.
    pub fn del(&mut self, key: &str) {
        tracing::trace!(key, "store del");
        self.backend.delete(key.as_bytes());
    }

    /// Exposes the bound backend for direct query/len/close use.
    pub fn backend(&mut self) -> &mut B {
        self.backend
    }
}
