//! The cart state container.

use crate::cart::CartEntry;
use crate::config::CartConfig;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::inventory::{HttpInventory, Inventory};
use crate::notify::Notifier;
use std::sync::Arc;
use stride_cache::{KvStore, Storage};
use tokio::sync::{watch, Mutex};

/// Shopping-cart state container.
///
/// Owns the current entry list and keeps it in sync with durable storage:
/// the persisted snapshot seeds the list at open, and every successful
/// mutation commits (persists, then publishes) the replacement list.
/// Mutations validate against the remote inventory before committing.
///
/// Mutations are serialized behind a single writer lock held across the
/// inventory await, so back-to-back calls cannot act on a stale list.
/// Reads go through the committed view and never wait on a mutation in
/// flight.
pub struct CartStore {
    inventory: Arc<dyn Inventory>,
    notifier: Arc<dyn Notifier>,
    kv: KvStore,
    storage_key: String,
    entries: Mutex<Vec<CartEntry>>,
    publisher: watch::Sender<Vec<CartEntry>>,
}

impl CartStore {
    /// Open a store, seeding state from the persisted snapshot.
    ///
    /// An absent snapshot starts the cart empty. An unparsable snapshot
    /// also starts it empty, with a structured warning; the user never
    /// sees an error for a corrupt snapshot.
    pub fn open(
        inventory: Arc<dyn Inventory>,
        notifier: Arc<dyn Notifier>,
        storage: Arc<dyn Storage>,
        config: CartConfig,
    ) -> Self {
        let kv = KvStore::new(storage);
        let initial = match kv.get::<Vec<CartEntry>>(&config.storage_key) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(
                    key = %config.storage_key,
                    error = %err,
                    "persisted cart unreadable, starting empty"
                );
                Vec::new()
            }
        };
        let (publisher, _) = watch::channel(initial.clone());
        Self {
            inventory,
            notifier,
            kv,
            storage_key: config.storage_key,
            entries: Mutex::new(initial),
            publisher,
        }
    }

    /// Open a store wired to the HTTP inventory service named by `config`.
    pub fn open_http(
        notifier: Arc<dyn Notifier>,
        storage: Arc<dyn Storage>,
        config: CartConfig,
    ) -> Self {
        let inventory = Arc::new(HttpInventory::with_base_url(&config.inventory_url));
        Self::open(inventory, notifier, storage, config)
    }

    /// The committed entry list.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.publisher.borrow().clone()
    }

    /// Subscribe to list replacements.
    ///
    /// The receiver fires once per committed mutation; the rendering layer
    /// re-renders from the value it carries.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartEntry>> {
        self.publisher.subscribe()
    }

    /// Check if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.publisher.borrow().is_empty()
    }

    /// Total item count (sum of amounts).
    pub fn item_count(&self) -> i64 {
        self.publisher.borrow().iter().map(|e| e.amount).sum()
    }

    /// Cart total in cents.
    pub fn total_cents(&self) -> i64 {
        self.publisher.borrow().iter().map(|e| e.subtotal_cents()).sum()
    }

    /// Format the cart total as a dollar string.
    pub fn total_display(&self) -> String {
        format!("${:.2}", self.total_cents() as f64 / 100.0)
    }

    /// Add one unit of a product to the cart.
    ///
    /// Failures are reported to the notification surface and swallowed;
    /// use [`CartStore::try_add_product`] to observe the cause.
    pub async fn add_product(&self, id: ProductId) {
        let result = self.try_add_product(id).await;
        self.report_failure("add_product", id, result);
    }

    /// Remove a product from the cart.
    pub async fn remove_product(&self, id: ProductId) {
        let result = self.try_remove_product(id).await;
        self.report_failure("remove_product", id, result);
    }

    /// Set the absolute amount for a product already in the cart.
    pub async fn update_product_amount(&self, id: ProductId, amount: i64) {
        let result = self.try_update_product_amount(id, amount).await;
        self.report_failure("update_product_amount", id, result);
    }

    /// Drop all entries from the cart.
    pub async fn clear(&self) {
        if let Err(err) = self.try_clear().await {
            tracing::warn!(error = %err, "cart clear failed");
            self.notifier.notify(err.user_message());
        }
    }

    /// Error-returning variant of [`CartStore::add_product`].
    ///
    /// A product already in the cart is treated as "add one more unit":
    /// the request routes through the update path with `current + 1`,
    /// subject to the same stock validation. A new product is fetched from
    /// the catalog and appended with amount 1.
    pub async fn try_add_product(&self, id: ProductId) -> Result<(), CartError> {
        let mut entries = self.entries.lock().await;
        if let Some(current) = entries.iter().find(|e| e.id == id).map(|e| e.amount) {
            self.apply_amount(&mut entries, id, current.saturating_add(1))
                .await
        } else {
            let product = self
                .inventory
                .product(id)
                .await
                .map_err(|source| CartError::AddFailed { id, source })?;
            entries.push(CartEntry::from_product(product));
            self.commit(&entries)
        }
    }

    /// Error-returning variant of [`CartStore::remove_product`].
    ///
    /// Removing an id that is not in the cart is a no-op, not an error.
    pub async fn try_remove_product(&self, id: ProductId) -> Result<(), CartError> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() < before {
            self.commit(&entries)?;
        }
        Ok(())
    }

    /// Error-returning variant of [`CartStore::update_product_amount`].
    ///
    /// The amount is an absolute set, accepted only if it does not exceed
    /// available stock. Updating an id that is not in the cart is a no-op.
    pub async fn try_update_product_amount(
        &self,
        id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        let mut entries = self.entries.lock().await;
        self.apply_amount(&mut entries, id, amount).await
    }

    /// Error-returning variant of [`CartStore::clear`].
    pub async fn try_clear(&self) -> Result<(), CartError> {
        let mut entries = self.entries.lock().await;
        if entries.is_empty() {
            return Ok(());
        }
        entries.clear();
        self.commit(&entries)
    }

    /// Validate and set an absolute amount under the writer lock.
    async fn apply_amount(
        &self,
        entries: &mut Vec<CartEntry>,
        id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        if amount < 0 {
            return Err(CartError::InvalidAmount(amount));
        }
        let Some(pos) = entries.iter().position(|e| e.id == id) else {
            return Ok(());
        };
        let stock = self
            .inventory
            .stock(id)
            .await
            .map_err(|source| CartError::UpdateFailed { id, source })?;
        if !stock.can_fulfill(amount) {
            return Err(CartError::StockInsufficient {
                id,
                requested: amount,
                available: stock.amount,
            });
        }
        entries[pos].amount = amount;
        self.commit(entries)
    }

    /// Commit a state change: write through to storage, then publish.
    ///
    /// Subscribers only ever observe persisted lists; a failed write
    /// aborts before publication.
    fn commit(&self, entries: &[CartEntry]) -> Result<(), CartError> {
        let snapshot = entries.to_vec();
        self.kv.set(&self.storage_key, &snapshot)?;
        self.publisher.send_replace(snapshot);
        Ok(())
    }

    fn report_failure(&self, op: &'static str, id: ProductId, result: Result<(), CartError>) {
        if let Err(err) = result {
            tracing::warn!(op, product = %id, error = %err, "cart mutation failed");
            self.notifier.notify(err.user_message());
        }
    }
}
