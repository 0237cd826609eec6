use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Serializes pipelines that work on the same source file name.
///
/// Requests for different names never wait on each other. Entries nobody holds
/// are dropped on the next acquisition.
#[derive(Debug, Default)]
pub struct FileNameLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl FileNameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, file_name: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(file_name.to_string()).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of names currently tracked.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
