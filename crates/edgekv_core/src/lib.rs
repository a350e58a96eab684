//! # EdgeKV Core
//!
//! The keyed store/graph layer of EdgeKV.
//!
//! This crate binds one [`KvBackend`] and the [`Payload`] codec into a
//! string-keyed collection with add/get/del plus raw backend access.
//! Backend choice is the caller's: pass a
//! [`MemoryBackend`](edgekv_storage::MemoryBackend) for ephemeral use
//! or a [`FileBackend`](edgekv_storage::FileBackend) for durable,
//! transactional storage with ordered key scans.
//!
//! ```rust
//! use edgekv_core::Store;
//! use edgekv_codec::Payload;
//! use edgekv_storage::MemoryBackend;
//!
//! let mut backend = MemoryBackend::new();
//! let mut store = Store::new(&mut backend);
//!
//! store.add("carlo", &Payload::from_value(&"locci").unwrap()).unwrap();
//! let name: String = store.get("carlo").unwrap().decode().unwrap();
//! assert_eq!(name, "locci");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod store;

pub use error::{CoreError, CoreResult};
pub use store::Store;

// Re-exported so callers of the core crate have the full surface
// without naming the lower crates.
pub use edgekv_codec::Payload;
pub use edgekv_storage::{FileBackend, KvBackend, MemoryBackend, QueryMode};
