//! # Cart
//!
//! The shopping cart and everything derived from it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           Cart Method              Effect               │
//! │  ──────────────           ───────────              ──────               │
//! │                                                                         │
//! │  "Add to cart" ──────────► add(product) ─────────► qty += 1 or push     │
//! │                                                                         │
//! │  "+" / "-" ──────────────► update_quantity(id, δ) ► qty += δ, drop ≤ 0 │
//! │                                                                         │
//! │  Trash icon ─────────────► remove(id) ───────────► retain(id != ..)     │
//! │                                                                         │
//! │  "Empty cart" ───────────► clear() ──────────────► items.clear()        │
//! │                                                                         │
//! │  Cart screen ────────────► total_price() ────────► Σ price × qty        │
//! │                            total_items() ────────► Σ qty                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one item per product id (adding again bumps the quantity)
//! - Every quantity is >= 1 (an item whose quantity would drop to 0 is removed)
//! - Items keep insertion order
//! - Totals are computed on every read; nothing is cached

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_quantity;
use crate::{DEFAULT_FREE_SHIPPING_THRESHOLD_CENTS, DEFAULT_SHIPPING_FEE_CENTS};

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart.
///
/// The product is a frozen copy taken when the item was first added, so the
/// cart keeps displaying consistent data even if the catalog is re-fetched or
/// switched to another category afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product snapshot.
    pub product: Product,

    /// Quantity in cart (always >= 1).
    pub quantity: i64,
}

impl CartItem {
    fn new(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered list of unique items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Finds the item for a product, if present.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - If product already in cart: quantity increases by 1
    /// - If product not in cart: appended with quantity 1
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id() == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartItem::new(product));
    }

    /// Adds `quantity` units of a product, as if `add` were called that many
    /// times.
    ///
    /// ## Returns
    /// - `Err(CoreError::Validation)` if `quantity` is not positive
    pub fn add_many(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id() == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return Ok(());
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity,
        });
        Ok(())
    }

    /// Removes an item by product id. Absent ids are ignored.
    ///
    /// ## Returns
    /// `true` if an item was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);
        self.items.len() != initial_len
    }

    /// Applies a quantity delta to an item.
    ///
    /// ## Behavior
    /// - `quantity + delta <= 0`: the item is removed
    /// - otherwise the quantity is replaced (no upper bound, saturating)
    /// - product not in cart: no-op
    ///
    /// ## Returns
    /// The new quantity, `Some(0)` if the item was removed, `None` if the
    /// product was not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Option<i64> {
        let index = self.items.iter().position(|i| i.product_id() == product_id)?;

        let new_quantity = self.items[index].quantity.saturating_add(delta);
        if new_quantity <= 0 {
            self.items.remove(index);
            return Some(0);
        }

        self.items[index].quantity = new_quantity;
        Some(new_quantity)
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Quantity of one product in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Σ quantity over all items.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Σ price × quantity over all items.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the totals summary under a shipping policy.
    pub fn totals(&self, policy: &ShippingPolicy) -> CartTotals {
        let subtotal = self.total_price();
        let shipping = policy.shipping_for(subtotal);

        CartTotals {
            line_count: self.line_count(),
            total_items: self.total_items(),
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
            remaining_for_free_shipping: policy.remaining_for_free_shipping(subtotal),
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Flat-fee shipping with a free-shipping threshold.
///
/// ```text
/// subtotal  > threshold ──► shipping = $0.00
/// subtotal <= threshold ──► shipping = flat_fee
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingPolicy {
    /// Subtotal that must be exceeded for free shipping.
    pub free_threshold: Money,

    /// Fee charged otherwise.
    pub flat_fee: Money,
}

impl ShippingPolicy {
    pub const fn new(free_threshold: Money, flat_fee: Money) -> Self {
        ShippingPolicy {
            free_threshold,
            flat_fee,
        }
    }

    /// Shipping cost for a given subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_threshold {
            Money::zero()
        } else {
            self.flat_fee
        }
    }

    /// How much more the shopper must spend to reach the threshold.
    ///
    /// `None` once the subtotal has reached the threshold.
    pub fn remaining_for_free_shipping(&self, subtotal: Money) -> Option<Money> {
        if subtotal < self.free_threshold {
            Some(self.free_threshold - subtotal)
        } else {
            None
        }
    }
}

impl Default for ShippingPolicy {
    /// $5.99 shipping, free above $100.00.
    fn default() -> Self {
        ShippingPolicy::new(
            Money::from_cents(DEFAULT_FREE_SHIPPING_THRESHOLD_CENTS),
            Money::from_cents(DEFAULT_SHIPPING_FEE_CENTS),
        )
    }
}

// =============================================================================
// Totals Summary
// =============================================================================

/// Cart totals summary for the cart screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: i64,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    pub remaining_for_free_shipping: Option<Money>,
}

// =============================================================================
// Order Summary
// =============================================================================

/// Result of a simulated checkout.
///
/// No payment happens: the summary only records what was "ordered".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    #[ts(as = "String")]
    pub order_id: Uuid,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl OrderSummary {
    /// Freezes the cart into an order summary.
    ///
    /// The id and timestamp come from the caller so this stays pure.
    ///
    /// ## Returns
    /// - `Err(CoreError::EmptyCart)` when there is nothing to order
    pub fn from_cart(
        cart: &Cart,
        policy: &ShippingPolicy,
        order_id: Uuid,
        placed_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        Ok(OrderSummary {
            order_id,
            placed_at,
            items: cart.items().to_vec(),
            totals: cart.totals(policy),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            description: format!("Description {}", id),
            category: "electronics".to_string(),
            image: format!("https://example.com/{}.jpg", id),
            rating: Rating::new(4.1, 10),
        }
    }

    /// Recomputes both aggregates from scratch and compares them with the
    /// cart's own answers, and checks that no quantity is below 1.
    fn assert_consistent(cart: &Cart) {
        let expected_price: i64 = cart
            .items()
            .iter()
            .map(|i| i.product.price.cents() * i.quantity)
            .sum();
        let expected_items: i64 = cart.items().iter().map(|i| i.quantity).sum();

        assert_eq!(cart.total_price().cents(), expected_price);
        assert_eq!(cart.total_items(), expected_items);
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn test_repeated_add_keeps_one_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        for n in 1..=5 {
            cart.add(&product);
            assert_eq!(cart.line_count(), 1);
            assert_eq!(cart.quantity_of(product.id), n);
            assert_consistent(&cart);
        }
    }

    #[test]
    fn test_add_then_update_to_zero_walkthrough() {
        let mut cart = Cart::new();
        let p1 = test_product(1, 1000);

        cart.add(&p1);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total_price().cents(), 1000);

        cart.add(&p1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_price().cents(), 2000);

        assert_eq!(cart.update_quantity(p1.id, -2), Some(0));
        assert!(cart.is_empty());
        assert!(cart.total_price().is_zero());
        assert_consistent(&cart);
    }

    #[test]
    fn test_two_products_then_remove_first() {
        let mut cart = Cart::new();
        let p1 = test_product(1, 1000);
        let p2 = test_product(2, 500);

        cart.add(&p1);
        cart.add(&p2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().cents(), 1500);

        assert!(cart.remove(p1.id));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].product_id(), p2.id);
        assert_consistent(&cart);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = Cart::new();
        for id in [3, 1, 2] {
            cart.add(&test_product(id, 100));
        }
        cart.add(&test_product(1, 100));

        let ids: Vec<i64> = cart.items().iter().map(|i| i.product_id().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));
        let before = cart.clone();

        assert_eq!(cart.update_quantity(ProductId::new(99), 3), None);
        assert_eq!(cart.update_quantity(ProductId::new(99), -3), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_positive_and_negative() {
        let mut cart = Cart::new();
        let product = test_product(1, 250);
        cart.add(&product);

        assert_eq!(cart.update_quantity(product.id, 4), Some(5));
        assert_eq!(cart.update_quantity(product.id, -1), Some(4));
        assert_eq!(cart.total_price().cents(), 1000);
        assert_consistent(&cart);

        // Overshooting below zero still just removes the item
        assert_eq!(cart.update_quantity(product.id, -100), Some(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_has_no_upper_bound() {
        let mut cart = Cart::new();
        let product = test_product(1, 1);
        cart.add(&product);

        assert_eq!(cart.update_quantity(product.id, 1_000_000), Some(1_000_001));
        assert_eq!(cart.update_quantity(product.id, i64::MAX), Some(i64::MAX));
        assert_eq!(cart.total_items(), i64::MAX);
        assert_eq!(cart.total_price().cents(), i64::MAX);
    }

    #[test]
    fn test_add_many() {
        let mut cart = Cart::new();
        let product = test_product(1, 300);

        cart.add_many(&product, 3).unwrap();
        cart.add(&product);
        assert_eq!(cart.quantity_of(product.id), 4);
        assert_eq!(cart.line_count(), 1);

        assert!(matches!(
            cart.add_many(&product, 0),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(cart.quantity_of(product.id), 4);
    }

    #[test]
    fn test_mixed_sequence_stays_consistent() {
        enum Op {
            Add(usize),
            Remove(usize),
            Update(usize, i64),
        }

        let mut cart = Cart::new();
        let products: Vec<Product> = (1..=4).map(|id| test_product(id, id * 175)).collect();

        let ops = [
            Op::Add(0),
            Op::Add(1),
            Op::Add(0),
            Op::Update(1, 6),
            Op::Add(2),
            Op::Remove(0),
            Op::Update(2, -1),
            Op::Add(3),
            Op::Remove(0),
        ];

        for op in &ops {
            match *op {
                Op::Add(i) => cart.add(&products[i]),
                Op::Remove(i) => {
                    cart.remove(products[i].id);
                }
                Op::Update(i, delta) => {
                    cart.update_quantity(products[i].id, delta);
                }
            }
            assert_consistent(&cart);
        }

        assert_eq!(cart.total_items(), 8);
        assert_eq!(cart.total_price().cents(), 7 * 350 + 700);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 999));
        cart.add(&test_product(2, 1));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::new();
        let product = test_product(1, 299);
        cart.add_many(&product, 3).unwrap();

        assert_eq!(cart.items()[0].line_total().cents(), 897);
    }

    #[test]
    fn test_shipping_policy_threshold() {
        let policy = ShippingPolicy::default();

        assert_eq!(policy.shipping_for(Money::from_cents(5_000)).cents(), 599);
        // Exactly at the threshold still pays shipping
        assert_eq!(policy.shipping_for(Money::from_cents(10_000)).cents(), 599);
        assert!(policy.shipping_for(Money::from_cents(10_001)).is_zero());

        assert_eq!(
            policy.remaining_for_free_shipping(Money::from_cents(7_550)),
            Some(Money::from_cents(2_450))
        );
        assert_eq!(policy.remaining_for_free_shipping(Money::from_cents(10_000)), None);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_many(&test_product(1, 2_500), 2).unwrap();
        cart.add(&test_product(2, 1_000));

        let totals = cart.totals(&ShippingPolicy::default());
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.subtotal.cents(), 6_000);
        assert_eq!(totals.shipping.cents(), 599);
        assert_eq!(totals.total.cents(), 6_599);
        assert_eq!(totals.remaining_for_free_shipping, Some(Money::from_cents(4_000)));

        cart.add_many(&test_product(3, 5_000), 1).unwrap();
        let totals = cart.totals(&ShippingPolicy::default());
        assert!(totals.shipping.is_zero());
        assert_eq!(totals.total.cents(), 11_000);
        assert_eq!(totals.remaining_for_free_shipping, None);
    }

    #[test]
    fn test_order_summary() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1_999));

        let order_id = Uuid::new_v4();
        let placed_at = Utc::now();
        let summary =
            OrderSummary::from_cart(&cart, &ShippingPolicy::default(), order_id, placed_at)
                .unwrap();

        assert_eq!(summary.order_id, order_id);
        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.totals.total.cents(), 1_999 + 599);
    }

    #[test]
    fn test_order_summary_rejects_empty_cart() {
        let result = OrderSummary::from_cart(
            &Cart::new(),
            &ShippingPolicy::default(),
            Uuid::new_v4(),
            Utc::now(),
        );
        assert!(matches!(result, Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_cart_serializes_items() {
        let mut cart = Cart::new();
        cart.add(&test_product(5, 100));

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["items"][0]["quantity"], 1);
        assert_eq!(json["items"][0]["product"]["id"], 5);
        assert_eq!(json["items"][0]["product"]["price"], 100);
    }
}
