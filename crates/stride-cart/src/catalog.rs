//! Catalog wire types returned by the inventory service.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Product details, as served by `GET /products/{id}`.
///
/// Display fields are copied into the cart entry at add-time, so the cart
/// stays renderable without another catalog round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Product image, if any.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price_cents as f64 / 100.0)
    }
}

/// Available stock for a product, as served by `GET /stock/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StockLevel {
    /// Currently available quantity.
    pub amount: i64,
}

impl StockLevel {
    /// Create a new stock level.
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Check if a requested quantity is available.
    pub fn can_fulfill(&self, requested: i64) -> bool {
        self.amount >= requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_fulfill_bounds() {
        let stock = StockLevel::new(2);
        assert!(stock.can_fulfill(0));
        assert!(stock.can_fulfill(2));
        assert!(!stock.can_fulfill(3));
    }

    #[test]
    fn test_price_display() {
        let product = Product {
            id: ProductId::new(5),
            name: "Shoe".to_string(),
            price_cents: 13999,
            image_url: None,
        };
        assert_eq!(product.price_display(), "$139.99");
    }

    #[test]
    fn test_product_decodes_without_image() {
        let product: Product =
            serde_json::from_str(r#"{"id":5,"name":"Shoe","price_cents":13999}"#).unwrap();
        assert_eq!(product.id, ProductId::new(5));
        assert_eq!(product.image_url, None);
    }
}
