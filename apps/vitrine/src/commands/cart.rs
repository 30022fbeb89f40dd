//! # Cart Commands
//!
//! Cart manipulation for the view layer.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│  Order   │                        │
//! │  │  Cart    │     │          │     │  Placed  │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                 ▲                              │
//! │                   add_to_cart       checkout                            │
//! │                   update_cart_item  (checkout.rs)                       │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use vitrine_core::{Cart, CartItem, CartTotals, ProductId, ShippingPolicy};

use crate::error::ApiError;
use crate::state::Store;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn new(cart: &Cart, policy: &ShippingPolicy) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: cart.totals(policy),
        }
    }
}

fn respond(store: &Store) -> CartResponse {
    CartResponse::new(&store.cart(), &store.config().shipping)
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CART                                                     3 items       │
/// │  ──────────────────────────────────────────────────────────────────     │
/// │  Fjallraven Backpack        x2      $219.90                             │
/// │  Mens Cotton Jacket         x1       $55.99                             │
/// │  ──────────────────────────────────────────────────────────────────     │
/// │  Subtotal                           $275.89                             │
/// │  Shipping                             FREE                              │
/// │  TOTAL                              $275.89                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(store: &Store) -> CartResponse {
    debug!("get_cart command");
    respond(store)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases by `quantity`
/// - Not in cart: appended
/// - Resolved from the loaded catalog, then the cart, then the catalog
///   service, so anything the detail screen shows can be added
///
/// ## Arguments
/// * `product_id` - Product to add
/// * `quantity` - Units to add (default: 1)
pub async fn add_to_cart(
    store: &Store,
    product_id: ProductId,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    debug!(%product_id, ?quantity, "add_to_cart command");

    let product = store.product_for_cart(product_id).await?;

    match quantity {
        None => store.add_to_cart(&product),
        Some(quantity) => store.add_to_cart_many(&product, quantity)?,
    }

    Ok(respond(store))
}

/// Changes a cart item's quantity by `delta`.
///
/// ## Behavior
/// - Result ≤ 0: the item is removed
/// - Product not in cart: nothing happens
pub fn update_cart_item(store: &Store, product_id: ProductId, delta: i64) -> CartResponse {
    debug!(%product_id, delta, "update_cart_item command");
    store.update_quantity(product_id, delta);
    respond(store)
}

/// Removes an item from the cart. Absent is not an error.
pub fn remove_from_cart(store: &Store, product_id: ProductId) -> CartResponse {
    debug!(%product_id, "remove_from_cart command");
    store.remove_from_cart(product_id);
    respond(store)
}

/// Clears all items from the cart.
pub fn clear_cart(store: &Store) -> CartResponse {
    debug!("clear_cart command");
    store.clear_cart();
    respond(store)
}
