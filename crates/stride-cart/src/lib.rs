//! Shopping-cart state container for the Stride storefront.
//!
//! The [`CartStore`] owns the list of products currently in a user's cart,
//! persists that list across sessions, and exposes operations to add,
//! remove, and adjust item quantities against a remote inventory check:
//!
//! - **State holder** — the current entry list plus a persistence slot.
//! - **Mutations** — `add_product`, `remove_product`,
//!   `update_product_amount`; each validates against remote inventory
//!   state before committing.
//! - **Persistence sync** — every committed change is written through to
//!   durable storage, and the stored snapshot seeds state at open.
//!
//! Collaborators are injected as trait objects, so ownership and
//! testability stay explicit: [`Inventory`] for the remote catalog,
//! [`Notifier`] for the user-facing message surface, and
//! `stride_cache::Storage` for durability.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stride_cart::prelude::*;
//! use stride_cache::FileStore;
//!
//! let storage = Arc::new(FileStore::open("cart.json")?);
//! let store = CartStore::open_http(
//!     Arc::new(LogNotifier::new()),
//!     storage,
//!     CartConfig::default().with_inventory_url("http://localhost:3333"),
//! );
//!
//! store.add_product(ProductId::new(5)).await;
//! let mut updates = store.subscribe();
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod inventory;
pub mod notify;
pub mod testing;

pub use cart::{CartEntry, CartStore};
pub use error::CartError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartEntry, CartStore};
    pub use crate::catalog::{Product, StockLevel};
    pub use crate::config::CartConfig;
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::inventory::{HttpInventory, Inventory};
    pub use crate::notify::{LogNotifier, Notifier};
}
