//! Cart line entries.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product line in the cart.
///
/// Invariants: at most one entry per product id in the cart list, and
/// `amount >= 0`. An amount of 0 is a valid stored state; only an explicit
/// remove deletes the entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Product identifier.
    pub id: ProductId,
    /// Display name, copied from the catalog at add-time.
    pub name: String,
    /// Unit price in cents, copied from the catalog at add-time.
    pub price_cents: i64,
    /// Product image, copied from the catalog at add-time.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Quantity in the cart.
    pub amount: i64,
}

impl CartEntry {
    /// Create an entry for a freshly added product, with amount 1.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price_cents: product.price_cents,
            image_url: product.image_url,
            amount: 1,
        }
    }

    /// Line subtotal in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.price_cents * self.amount
    }

    /// Format the line subtotal as a dollar string.
    pub fn subtotal_display(&self) -> String {
        format!("${:.2}", self.subtotal_cents() as f64 / 100.0)
    }
}
