//! # vitrine-core: Pure Business Logic for Vitrine
//!
//! This crate is the **heart** of Vitrine. It contains the catalog types and
//! all cart arithmetic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Layer (apps/vitrine)                    │   │
//! │  │    Catalog ──► Product Detail ──► Cart ──► Checkout             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Store (apps/vitrine::state)                  │   │
//! │  │    add_to_cart, update_quantity, fetch_all_products, etc.       │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────────┐  ┌────────────▼───────────────┐   │
//! │  │   ★ vitrine-core (THIS CRATE) ★ │  │  vitrine-catalog           │   │
//! │  │                                 │  │  GET /products             │   │
//! │  │  types   money   cart           │  │  GET /products/categories  │   │
//! │  │  Product Money   Cart           │  │  (reqwest)                 │   │
//! │  │  Rating  Shipping CartItem      │  └────────────────────────────┘   │
//! │  │                                 │                                    │
//! │  │  NO I/O • NO NETWORK • PURE     │                                    │
//! │  └─────────────────────────────────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Rating, CategoryFilter)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart, CartItem, derived totals, shipping and order summary
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Derived Totals**: cart totals are computed on read, never stored
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::{Cart, Money, Product, ProductId, Rating};
//!
//! let product = Product {
//!     id: ProductId::new(1),
//!     title: "Backpack".to_string(),
//!     price: Money::from_cents(1000),
//!     description: String::new(),
//!     category: "men's clothing".to_string(),
//!     image: "https://example.com/1.jpg".to_string(),
//!     rating: Rating::new(3.9, 120),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&product);
//! cart.add(&product);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Money` instead of
// `use vitrine_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals, OrderSummary, ShippingPolicy};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The category tag that means "no filter".
///
/// The remote API has no such category; the storefront treats it as a
/// request for the full catalog.
pub const ALL_CATEGORIES: &str = "all";

/// Highest average rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Subtotal above which shipping is free ($100.00).
pub const DEFAULT_FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;

/// Flat shipping fee below the free-shipping threshold ($5.99).
pub const DEFAULT_SHIPPING_FEE_CENTS: i64 = 599;
