// src/chat/locks.rs

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Idle entries are swept once the map grows past this.
const DEFAULT_SWEEP_THRESHOLD: usize = 1024;

/// One async mutex per user, so a user's chat turns run one at a time while
/// different users proceed in parallel. The map is self-pruning: when it
/// outgrows `sweep_threshold`, entries nobody holds are dropped.
pub struct UserLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    sweep_threshold: usize,
}

impl Default for UserLocks {
    fn default() -> Self {
        Self::with_sweep_threshold(DEFAULT_SWEEP_THRESHOLD)
    }
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sweep_threshold(sweep_threshold: usize) -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
            sweep_threshold,
        }
    }

    /// Wait for exclusive access to `user_id`'s turn. Released on drop.
    pub async fn acquire(&self, user_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            if !locks.contains_key(user_id) && locks.len() >= self.sweep_threshold {
                // A held guard keeps its own Arc, so count 1 means idle.
                locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            }
            locks
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    pub async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}
