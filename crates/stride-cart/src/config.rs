//! Cart store configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a cart store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// Storage key the persisted snapshot lives under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Base URL of the inventory service.
    #[serde(default = "default_inventory_url")]
    pub inventory_url: String,
}

fn default_storage_key() -> String {
    "stride:cart".to_string()
}

fn default_inventory_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            inventory_url: default_inventory_url(),
        }
    }
}

impl CartConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the inventory service base URL.
    pub fn with_inventory_url(mut self, url: impl Into<String>) -> Self {
        self.inventory_url = url.into();
        self
    }
}
