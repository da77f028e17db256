//! Cart error types.

use crate::ids::ProductId;
use stride_cache::CacheError;
use stride_data::FetchError;
use thiserror::Error;

/// Errors that can occur in cart mutations.
///
/// The notifying operations convert these to a user-facing message and
/// swallow them; the `try_*` variants return them to the caller.
#[derive(Error, Debug)]
pub enum CartError {
    /// Product lookup failed while adding to the cart.
    #[error("failed to add product {id}")]
    AddFailed {
        id: ProductId,
        #[source]
        source: FetchError,
    },

    /// Requested quantity exceeds available stock.
    #[error("insufficient stock for {id}: requested {requested}, available {available}")]
    StockInsufficient {
        id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Stock lookup failed while updating an amount.
    #[error("failed to update amount for {id}")]
    UpdateFailed {
        id: ProductId,
        #[source]
        source: FetchError,
    },

    /// Requested amount is negative.
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),

    /// Write-through to durable storage failed.
    #[error("failed to persist cart")]
    Persist(#[from] CacheError),
}

impl CartError {
    /// Stable user-facing message for the notification surface.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::AddFailed { .. } => "Could not add the product to your cart",
            CartError::StockInsufficient { .. } => "Requested quantity is out of stock",
            CartError::UpdateFailed { .. } | CartError::InvalidAmount(_) => {
                "Could not update the product quantity"
            }
            CartError::Persist(_) => "Could not save your cart",
        }
    }
}
