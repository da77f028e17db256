//! In-memory store for tests and ephemeral sessions.

use crate::{CacheError, Storage};
use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value store held entirely in memory.
///
/// Nothing survives the process; useful for tests and for sessions that
/// should not leave a snapshot behind.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::Store("store lock poisoned".to_string()))
    }
}

impl Storage for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
