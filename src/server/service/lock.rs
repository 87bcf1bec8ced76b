//! Per-key async locks for serializing booking check-then-insert sequences.
//!
//! A reservation is checked for overlaps and inserted while holding the lock for its
//! court; a lesson while holding the lock for its coach. Two requests for different
//! keys never wait on each other.

use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per key.
///
/// Clones share the registry. Entries nobody holds are pruned on the next acquire.
#[derive(Clone)]
pub struct KeyedLocks<K> {
    locks: Arc<Mutex<HashMap<K, Arc<Mutex<()>>>>>,
}

impl<K> Default for KeyedLocks<K> {
    fn default() -> Self {
        Self {
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K: Eq + Hash + Clone> KeyedLocks<K> {
    /// Waits for exclusive access to `key`.
    ///
    /// The returned guard releases the key when dropped.
    pub async fn acquire(&self, key: K) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry(key)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }

    /// Number of keys currently tracked.
    pub async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}
