//! Per-document async locks for read-modify-write operations.
//!
//! Appending an invoice or a player reads the owner document, pushes onto its embedded
//! list, and writes the whole list back. Two such appends racing on the same owner would
//! otherwise both read the old list and the second write would drop the first append.
//! `DocumentLocks` hands out one `tokio::sync::Mutex` per document key so those
//! sequences run one at a time for a given document while unrelated documents proceed
//! in parallel.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of async locks keyed by document, e.g. `"teams/7"`.
///
/// Cloning is cheap and every clone shares the same registry.
#[derive(Clone, Default)]
pub struct DocumentLocks {
    locks: Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>,
}

impl DocumentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to the document identified by `key`.
    ///
    /// The lock is released when the returned guard is dropped. Entries that nobody holds
    /// or waits on are pruned from the registry on each call.
    ///
    /// # Arguments
    /// - `key` - Document key in the form `"<kind>/<id>"`
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Guard holding the document lock
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self
                .locks
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            locks.retain(|existing, lock| existing == key || Arc::strong_count(lock) > 1);

            locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }

    /// Number of document keys currently tracked.
    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}
