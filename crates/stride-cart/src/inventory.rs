//! Inventory service seam.

use crate::catalog::{Product, StockLevel};
use crate::ids::ProductId;
use async_trait::async_trait;
use stride_data::{FetchClient, FetchError};

/// Read access to the remote inventory.
///
/// Object-safe so stores can hold `Arc<dyn Inventory>` and tests can swap
/// in a deterministic implementation.
#[async_trait]
pub trait Inventory: Send + Sync {
    /// Fetch product details by id.
    async fn product(&self, id: ProductId) -> Result<Product, FetchError>;

    /// Fetch the currently available stock for a product.
    async fn stock(&self, id: ProductId) -> Result<StockLevel, FetchError>;
}

/// Inventory backed by the HTTP service.
pub struct HttpInventory {
    client: FetchClient,
}

impl HttpInventory {
    /// Wrap an existing fetch client.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Build a client against the service at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(FetchClient::new().with_base_url(base_url))
    }
}

#[async_trait]
impl Inventory for HttpInventory {
    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.client.get_json(&format!("/products/{id}")).await
    }

    async fn stock(&self, id: ProductId) -> Result<StockLevel, FetchError> {
        self.client.get_json(&format!("/stock/{id}")).await
    }
}
