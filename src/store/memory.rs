//! In-memory snapshot store with change notification.
//!
//! Clones share one underlying map, so two sessions holding clones of
//! the same store behave like two tabs over one storage medium.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

use tracing::{debug, instrument};

use super::{SnapshotStore, StoreError};

/// Shared in-memory key/value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    watchers: Arc<Mutex<Vec<Sender<()>>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to change notifications.
    ///
    /// The returned channel receives one payload-less signal for every
    /// write that changes a stored value. The signal carries no state;
    /// receivers must re-`load` the key they care about.
    #[instrument(skip(self))]
    pub fn subscribe(&self) -> Receiver<()> {
        let (sender, receiver) = channel();
        self.watchers.lock().unwrap().push(sender);
        receiver
    }

    fn notify(&self) {
        let mut watchers = self.watchers.lock().unwrap();
        watchers.retain(|watcher| watcher.send(()).is_ok());
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        let changed = {
            let mut entries = self.entries.lock().unwrap();
            let previous = entries.insert(key.to_string(), payload.to_string());
            previous.as_deref() != Some(payload)
        };

        // Writes that leave the value unchanged stay silent, so
        // watchers only wake for actual changes.
        if changed {
            debug!(key, "Stored value changed, notifying watchers");
            self.notify();
        }
        Ok(())
    }
}
