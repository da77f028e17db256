//! Newtype ID for type-safe product identifiers.
//!
//! The inventory service keys products by integer id; wrapping it prevents
//! mixing product ids up with amounts or other integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create a new ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(5);
        assert_eq!(id.value(), 5);
        assert_eq!(format!("{}", id), "5");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(5), ProductId::from(5));
        assert_ne!(ProductId::new(5), ProductId::new(9));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");

        let id: ProductId = serde_json::from_str("9").unwrap();
        assert_eq!(id, ProductId::new(9));
    }
}
