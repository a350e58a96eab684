//! Transactional file backend built on `redb`.

use crate::backend::{KvBackend, QueryMode};
use crate::error::{StoreError, StoreResult};
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The single implicit namespace holding all records of one backend.
const RECORDS: TableDefinition<&[u8], &[u8]> = TableDefinition::new("records");

/// A durable, transactional file backend.
///
/// Wraps [`redb`], a sorted single-writer/multi-reader embedded engine,
/// under one fixed table. Keys are ordered lexicographically by byte,
/// which is what makes the prefix scan in [`query`](KvBackend::query)
/// a single contiguous run.
///
/// # Concurrency
///
/// All guarantees come from the engine: at most one read-write
/// transaction at a time, any number of concurrent read-only
/// transactions with snapshot isolation. Every operation opens its own
/// transaction and releases it on all exit paths, including errors. A
/// write blocked on the transaction lock waits indefinitely.
///
/// # Example
///
/// ```no_run
/// use edgekv_storage::{FileBackend, KvBackend};
///
/// let mut backend = FileBackend::open("edges.redb").unwrap();
/// backend.put(b"carlo", b"locci").unwrap();
/// assert_eq!(backend.get(b"carlo").unwrap(), b"locci");
/// backend.close().unwrap();
/// ```
pub struct FileBackend {
    path: PathBuf,
    /// `None` once the backend has been closed.
    db: Option<Database>,
}

impl std::fmt::Debug for FileBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBackend")
            .field("path", &self.path)
            .field("open", &self.db.is_some())
            .finish()
    }
}

impl FileBackend {
    /// Opens or creates the database file at `path`.
    ///
    /// The implicit record table is created up front if absent, so
    /// every later operation can assume it exists without re-checking.
    /// On failure the partially opened handle is dropped before the
    /// error is returned; no handle is left behind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be created or
    /// opened (e.g. permission denied), or an engine error if the
    /// bootstrap transaction fails.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let db = Database::create(path)?;

        // Bootstrap the namespace; `db` is dropped if any step fails.
        let txn = db.begin_write()?;
        txn.open_table(RECORDS)?;
        txn.commit()?;

        tracing::debug!(path = %path.display(), "file backend opened");

        Ok(Self {
            path: path.to_path_buf(),
            db: Some(db),
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the snapshot record count from the engine's table
    /// statistics, inside a read-only transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Closed`] after [`close`](KvBackend::close),
    /// or an engine error if the statistics read fails.
    pub fn len(&self) -> StoreResult<u64> {
        let txn = self.handle()?.begin_read()?;
        let table = txn.open_table(RECORDS)?;
        Ok(table.len()?)
    }

    /// Returns `true` if the backend holds no records.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`len`](Self::len).
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn handle(&self) -> StoreResult<&Database> {
        self.db.as_ref().ok_or(StoreError::Closed)
    }

    fn remove(&self, key: &[u8]) -> StoreResult<()> {
        let txn = self.handle()?.begin_write()?;
        {
            let mut table = txn.open_table(RECORDS)?;
            // Absent keys yield `None` here, which commits cleanly.
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &[u8]) -> StoreResult<Vec<u8>> {
        let txn = self.handle()?.begin_read()?;
        let table = txn.open_table(RECORDS)?;
        match table.get(key)? {
            Some(value) => Ok(value.value().to_vec()),
            None => Err(StoreError::NotFound),
        }
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let txn = self.handle()?.begin_write()?;
        {
            let mut table = txn.open_table(RECORDS)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) {
        // Deletion cannot fail by contract; an engine failure leaves the
        // key in place, which the caller observes as it would any other
        // lost race. Log it and move on.
        if let Err(err) = self.remove(key) {
            tracing::warn!(%err, "delete failed, key left untouched");
        }
    }

    fn query(&self, anchor: &[u8], mode: QueryMode) -> StoreResult<BTreeMap<Vec<u8>, Vec<u8>>> {
        let txn = self.handle()?.begin_read()?;
        let table = txn.open_table(RECORDS)?;
        let mut matches = BTreeMap::new();

        match mode {
            QueryMode::Prefix => {
                // Sorted byte order puts every key with this prefix in one
                // contiguous run starting at the first key >= anchor, so a
                // single forward scan from the seek point is complete.
                for entry in table.range::<&[u8]>(anchor..)? {
                    let (key, value) = entry?;
                    if !key.value().starts_with(anchor) {
                        break;
                    }
                    matches.insert(key.value().to_vec(), value.value().to_vec());
                }
            }
            QueryMode::Suffix => {
                // Suffix matches are scattered across the sort order, so a
                // contiguous run from a seek point would miss matches. The
                // whole table is scanned instead: O(n) in the record count.
                for entry in table.iter()? {
                    let (key, value) = entry?;
                    if key.value().ends_with(anchor) {
                        matches.insert(key.value().to_vec(), value.value().to_vec());
                    }
                }
            }
        }

        Ok(matches)
    }

    fn close(&mut self) -> StoreResult<()> {
        match self.db.take() {
            Some(db) => {
                drop(db);
                tracing::debug!(path = %self.path.display(), "file backend closed");
                Ok(())
            }
            None => Err(StoreError::Closed),
        }
    }
}
