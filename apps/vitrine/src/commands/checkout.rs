//! # Checkout Command
//!
//! Simulated checkout. No payment is taken: the cart is frozen into a
//! receipt and emptied.
//!
//! ```text
//!   cart (non-empty) ──checkout──► CheckoutReceipt ──► cart = []
//!   cart (empty)     ──checkout──► ApiError CART_ERROR, nothing changes
//! ```

use serde::Serialize;
use tracing::debug;
use vitrine_core::{CartItem, CartTotals, OrderSummary};

use crate::error::ApiError;
use crate::state::Store;

/// Receipt shown after a simulated checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_id: String,
    /// RFC 3339 timestamp
    pub placed_at: String,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<OrderSummary> for CheckoutReceipt {
    fn from(order: OrderSummary) -> Self {
        CheckoutReceipt {
            order_id: order.order_id.to_string(),
            placed_at: order.placed_at.to_rfc3339(),
            items: order.items,
            totals: order.totals,
        }
    }
}

/// Places the order and empties the cart.
pub fn checkout(store: &Store) -> Result<CheckoutReceipt, ApiError> {
    debug!("checkout command");
    let order = store.checkout()?;
    Ok(order.into())
}
