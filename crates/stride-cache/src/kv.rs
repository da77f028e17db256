//! Typed wrapper with automatic JSON serialization.

use crate::{CacheError, Storage};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Type-safe view over a [`Storage`] backend.
///
/// Values are stored as JSON strings, so anything that implements
/// `Serialize` and `DeserializeOwned` round-trips through any backend.
#[derive(Clone)]
pub struct KvStore {
    storage: Arc<dyn Storage>,
}

impl KvStore {
    /// Wrap a storage backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Get a value, or `None` if the key is absent.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Vec<CartEntry>> = kv.get("stride:cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.storage.load(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value, replacing whatever was stored under the key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.storage.store(key, &raw)
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.storage.remove(key)
    }
}
