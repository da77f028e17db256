//! Deterministic collaborator implementations.
//!
//! Used by the test suites and handy for offline development, where the
//! inventory service and the toast surface are not available.

use crate::catalog::{Product, StockLevel};
use crate::ids::ProductId;
use crate::inventory::Inventory;
use crate::notify::Notifier;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use stride_data::FetchError;

/// Inventory backed by in-memory maps.
///
/// Unknown ids answer the way the HTTP service would: a 404.
#[derive(Default)]
pub struct StaticInventory {
    products: HashMap<i64, Product>,
    stock: HashMap<i64, StockLevel>,
}

impl StaticInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product together with its available stock.
    pub fn with_product(mut self, product: Product, stock_amount: i64) -> Self {
        self.stock
            .insert(product.id.value(), StockLevel::new(stock_amount));
        self.products.insert(product.id.value(), product);
        self
    }

    /// Override the stock level for an id.
    pub fn with_stock(mut self, id: ProductId, amount: i64) -> Self {
        self.stock.insert(id.value(), StockLevel::new(amount));
        self
    }
}

#[async_trait]
impl Inventory for StaticInventory {
    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.products
            .get(&id.value())
            .cloned()
            .ok_or_else(|| FetchError::Http {
                status: 404,
                url: format!("/products/{id}"),
            })
    }

    async fn stock(&self, id: ProductId) -> Result<StockLevel, FetchError> {
        self.stock
            .get(&id.value())
            .copied()
            .ok_or_else(|| FetchError::Http {
                status: 404,
                url: format!("/stock/{id}"),
            })
    }
}

/// Notifier that records every message for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create a notifier with no recorded messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
