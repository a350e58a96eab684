//! # EdgeKV Storage
//!
//! Key/value backend trait and implementations for EdgeKV.
//!
//! This crate provides the lowest-level storage abstraction for EdgeKV.
//! Backends are **opaque byte stores** keyed by byte sequences - they do
//! not interpret the values they store.
//!
//! ## Design Principles
//!
//! - One capability contract ([`KvBackend`]): get, put, delete, query, close
//! - Delete of an absent key is a silent no-op on every backend
//! - Get of an absent key is a distinguishable [`StoreError::NotFound`],
//!   never an empty success
//! - No retries or partial-failure recovery; every error goes to the caller
//!
//! ## Available Backends
//!
//! - [`MemoryBackend`] - mapping-based, no persistence, no key ordering
//! - [`FileBackend`] - durable and transactional via `redb`, with an
//!   ordered prefix/suffix key scan
//!
//! ## Example
//!
//! ```rust
//! use edgekv_storage::{KvBackend, MemoryBackend, StoreError};
//!
//! let mut backend = MemoryBackend::new();
//! backend.put(b"carlo", b"locci").unwrap();
//! assert_eq!(backend.get(b"carlo").unwrap(), b"locci");
//!
//! backend.delete(b"carlo");
//! assert!(matches!(backend.get(b"carlo"), Err(StoreError::NotFound)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::{KvBackend, QueryMode};
pub use error::{StoreError, StoreResult};
pub use file::FileBackend;
pub use memory::MemoryBackend;
