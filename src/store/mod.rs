//! Persistence port for snapshots.
//!
//! The transport is a raw string key/value store; snapshot encoding,
//! validation, and corrupt-input recovery sit above it in the provided
//! [`SnapshotStore::load`] and [`SnapshotStore::save`] methods, so
//! every backend gets identical fallback behavior.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use tracing::{debug, warn};

use crate::snapshot::Snapshot;

/// Error raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StoreError {
    /// The underlying medium failed to read or write.
    #[display("Storage I/O failed: {}", _0)]
    Io(String),

    /// The snapshot could not be encoded for storage.
    #[display("Snapshot encoding failed: {}", _0)]
    Encode(String),
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

/// A keyed store of serialized snapshots.
///
/// Implementors supply the raw transport; `load` and `save` are
/// provided on top of it.
pub trait SnapshotStore {
    /// Reads the raw payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes the raw payload under `key`, overwriting any previous
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the medium cannot be written.
    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError>;

    /// Loads the snapshot stored under `key`.
    ///
    /// Absent, unreadable, or corrupt entries all fall back to the
    /// default snapshot (empty round, zeroed stats); the failure is
    /// logged, never propagated.
    fn load(&self, key: &str) -> Snapshot {
        match self.read(key) {
            Ok(Some(payload)) => match Snapshot::decode(&payload) {
                Ok(snapshot) => snapshot,
                Err(error) => {
                    warn!(key, %error, "Stored snapshot is corrupt, starting fresh");
                    Snapshot::default()
                }
            },
            Ok(None) => {
                debug!(key, "No stored snapshot, starting fresh");
                Snapshot::default()
            }
            Err(error) => {
                warn!(key, %error, "Failed to read stored snapshot, starting fresh");
                Snapshot::default()
            }
        }
    }

    /// Encodes and writes the snapshot under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the write fails.
    fn save(&self, key: &str, snapshot: &Snapshot) -> Result<(), StoreError> {
        let payload = snapshot.encode()?;
        self.write(key, &payload)
    }
}
