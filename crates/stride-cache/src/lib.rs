//! Durable key-value storage for Stride.
//!
//! The cart keeps a persisted snapshot of its entry list so state survives
//! across sessions. This crate provides the storage seam:
//!
//! - [`Storage`] — the string key-value contract the cart writes through.
//! - [`FileStore`] — a JSON document on disk with atomic write-through.
//! - [`MemoryStore`] — ephemeral backend for tests and throwaway sessions.
//! - [`KvStore`] — typed JSON view over any backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stride_cache::{FileStore, KvStore};
//!
//! let store = Arc::new(FileStore::open("/var/lib/stride/cart.json")?);
//! let kv = KvStore::new(store);
//! kv.set("stride:cart", &entries)?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::MemoryStore;

/// Durable string key-value storage.
///
/// `load` returns `None` for an absent key; `store` overwrites
/// unconditionally. Implementations are shared across tasks, so the
/// contract is `Send + Sync` and takes `&self`.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write `value` under `key`, replacing any previous value.
    fn store(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Drop the value stored under `key`. Absent keys are a no-op.
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}
