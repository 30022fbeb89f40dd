//! # Store
//!
//! The single source of truth for the cart and the catalog during a session.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Store                                       │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐ │
//! │  │  CartState   │  │ CatalogState │  │ ConfigState  │  │ dyn Catalog │ │
//! │  │ Arc<Mutex<   │  │ Arc<Mutex<   │  │ Arc<..>      │  │ Source      │ │
//! │  │   Cart>>     │  │   Catalog>>  │  │ (read-only)  │  │ (HTTP/mock) │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └─────────────┘ │
//! │                                                                         │
//! │  Created once in run() and passed by reference (cloning is cheap).     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fetch Sequencing
//! ```text
//!   fetch A ──lock: loading=true──► await ............... ──lock: apply A──►
//!   fetch B ────lock: loading=true──► await ──lock: apply B──►
//!   add_to_cart ─────────────► (cart lock, applies immediately)
//!
//!   Result: products = A (last to resolve wins), loading cleared by B.
//! ```
//! No lock is held across an `.await`. Nothing is cancelled.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;
use vitrine_catalog::{CatalogError, CatalogResult, CatalogSource};
use vitrine_core::{
    Cart, CartTotals, CategoryFilter, CoreError, CoreResult, Money, OrderSummary, Product,
    ProductId, ALL_CATEGORIES,
};

use super::{CartState, Catalog, CatalogState, ConfigState};

/// Number of loaded products in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub tag: String,
    pub count: usize,
}

/// Explicitly owned storefront state container.
#[derive(Clone)]
pub struct Store {
    cart: CartState,
    catalog: CatalogState,
    config: Arc<ConfigState>,
    source: Arc<dyn CatalogSource>,
}

impl Store {
    /// Creates a store with an empty cart and nothing loaded.
    pub fn new(source: Arc<dyn CatalogSource>, config: ConfigState) -> Self {
        Store {
            cart: CartState::new(),
            catalog: CatalogState::new(),
            config: Arc::new(config),
            source,
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// App-start loading: all products, then the category list.
    pub async fn init(&self) {
        info!("Loading storefront catalog");
        // Failures are already recorded in state
        let _ = self.fetch_all_products().await;
        self.fetch_categories().await;
    }

    /// Pull-to-refresh: re-fetch the full catalog.
    pub async fn refresh(&self) -> CatalogResult<usize> {
        debug!("Refreshing catalog");
        self.fetch_all_products().await
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds one unit of a product.
    pub fn add_to_cart(&self, product: &Product) {
        self.cart.with_cart_mut(|c| c.add(product));
        debug!(product_id = %product.id, "Added to cart");
    }

    /// Adds `quantity` units of a product in one step.
    pub fn add_to_cart_many(&self, product: &Product, quantity: i64) -> CoreResult<()> {
        self.cart.with_cart_mut(|c| c.add_many(product, quantity))?;
        debug!(product_id = %product.id, quantity, "Added to cart");
        Ok(())
    }

    /// Removes a product from the cart. Absent is a no-op.
    pub fn remove_from_cart(&self, product_id: ProductId) {
        let removed = self.cart.with_cart_mut(|c| c.remove(product_id));
        debug!(%product_id, removed, "Remove from cart");
    }

    /// Adjusts a quantity by `delta`; at zero or below the item is removed.
    ///
    /// Returns the new quantity (`Some(0)` when removed), or `None` if the
    /// product was not in the cart.
    pub fn update_quantity(&self, product_id: ProductId, delta: i64) -> Option<i64> {
        let quantity = self
            .cart
            .with_cart_mut(|c| c.update_quantity(product_id, delta));
        debug!(%product_id, delta, ?quantity, "Update quantity");
        quantity
    }

    /// Empties the cart.
    pub fn clear_cart(&self) {
        self.cart.with_cart_mut(Cart::clear);
        debug!("Cart cleared");
    }

    /// Σ price × quantity, recomputed on every call.
    pub fn total_price(&self) -> Money {
        self.cart.with_cart(Cart::total_price)
    }

    /// Σ quantity, recomputed on every call.
    pub fn total_items(&self) -> i64 {
        self.cart.with_cart(Cart::total_items)
    }

    /// Quantity of one product in the cart, 0 if absent.
    pub fn cart_quantity(&self, product_id: ProductId) -> i64 {
        self.cart.with_cart(|c| c.quantity_of(product_id))
    }

    /// Totals including shipping under the configured policy.
    pub fn cart_totals(&self) -> CartTotals {
        let policy = self.config.shipping;
        self.cart.with_cart(|c| c.totals(&policy))
    }

    /// Simulated checkout: freezes the cart into an order and empties it.
    ///
    /// ## Returns
    /// - `Err(CoreError::EmptyCart)` when the cart is empty; nothing changes
    pub fn checkout(&self) -> CoreResult<OrderSummary> {
        let policy = self.config.shipping;
        let order = self.cart.with_cart_mut(|c| {
            let order = OrderSummary::from_cart(c, &policy, Uuid::new_v4(), Utc::now())?;
            c.clear();
            Ok::<_, CoreError>(order)
        })?;

        info!(
            order_id = %order.order_id,
            items = order.totals.total_items,
            total = %order.totals.total,
            "Order placed"
        );
        Ok(order)
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Replaces the product list with the full catalog.
    pub async fn fetch_all_products(&self) -> CatalogResult<usize> {
        self.load_products(ALL_CATEGORIES, self.source.fetch_all_products())
            .await
    }

    /// Replaces the product list with one category (or all of them).
    pub async fn fetch_products_by_category(
        &self,
        filter: &CategoryFilter,
    ) -> CatalogResult<usize> {
        let label = filter.to_string();
        self.load_products(&label, self.source.fetch_products_by_category(filter))
            .await
    }

    /// Replaces the category list. Failure is logged and otherwise ignored.
    pub async fn fetch_categories(&self) {
        match self.source.fetch_categories().await {
            Ok(categories) => {
                info!(count = categories.len(), "Categories loaded");
                self.catalog
                    .with_catalog_mut(|c| c.categories = categories);
            }
            Err(e) => warn!(error = %e, "Category fetch failed, keeping previous list"),
        }
    }

    /// Looks a product up in the loaded catalog, falling back to the source.
    ///
    /// The fallback does not touch catalog state.
    pub async fn find_product(&self, id: ProductId) -> Result<Product, StoreLookupError> {
        if let Some(product) = self.product(id) {
            return Ok(product);
        }

        debug!(%id, "Product not loaded, fetching");
        self.source
            .fetch_product(id)
            .await?
            .ok_or(StoreLookupError::Core(CoreError::ProductNotFound(id)))
    }

    /// Resolves a product to put in the cart.
    ///
    /// Loaded catalog first, then the cart's own copy (the shopper may have
    /// switched category since adding it), then the source.
    pub async fn product_for_cart(&self, id: ProductId) -> Result<Product, StoreLookupError> {
        if let Some(product) = self.product(id) {
            return Ok(product);
        }
        let in_cart = self
            .cart
            .with_cart(|c| c.get(id).map(|item| item.product.clone()));
        match in_cart {
            Some(product) => Ok(product),
            None => self.find_product(id).await,
        }
    }

    /// Shared fetch lifecycle: mark loading, await without locks, apply.
    async fn load_products<F>(&self, label: &str, fetch: F) -> CatalogResult<usize>
    where
        F: Future<Output = CatalogResult<Vec<Product>>>,
    {
        self.catalog.with_catalog_mut(|c| {
            c.loading = true;
            c.error = None;
        });
        debug!(category = %label, "Fetching products");

        match fetch.await {
            Ok(products) => {
                let count = products.len();
                self.catalog.with_catalog_mut(|c| {
                    c.products = products;
                    c.loading = false;
                });
                info!(category = %label, count, "Products loaded");
                Ok(count)
            }
            Err(e) => {
                warn!(category = %label, error = %e, "Product fetch failed");
                self.catalog.with_catalog_mut(|c| {
                    c.error = Some(e.user_message());
                    c.loading = false;
                });
                Err(e)
            }
        }
    }

    // =========================================================================
    // Read Access (snapshots)
    // =========================================================================

    pub fn cart(&self) -> Cart {
        self.cart.snapshot()
    }

    pub fn products(&self) -> Vec<Product> {
        self.catalog.with_catalog(|c| c.products.clone())
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.with_catalog(|c| c.categories.clone())
    }

    pub fn loading(&self) -> bool {
        self.catalog.with_catalog(|c| c.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.catalog.with_catalog(|c| c.error.clone())
    }

    /// Whole catalog snapshot under one lock.
    pub fn catalog(&self) -> Catalog {
        self.catalog.with_catalog(Catalog::clone)
    }

    /// Finds a product in the loaded catalog.
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.catalog.with_catalog(|c| c.product(id).cloned())
    }

    /// Loaded products passing a filter, client-side, without fetching.
    pub fn visible_products(&self, filter: &CategoryFilter) -> Vec<Product> {
        self.catalog
            .with_catalog(|c| filter.apply(&c.products).into_iter().cloned().collect())
    }

    /// Product counts: "all" first, then each category in list order.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.catalog.with_catalog(|c| {
            let mut counts = Vec::with_capacity(c.categories.len() + 1);
            counts.push(CategoryCount {
                tag: ALL_CATEGORIES.to_string(),
                count: c.products.len(),
            });
            counts.extend(c.categories.iter().map(|tag| CategoryCount {
                tag: tag.clone(),
                count: c.products.iter().filter(|p| p.in_category(tag)).count(),
            }));
            counts
        })
    }
}

/// Why a product lookup failed.
#[derive(Debug, thiserror::Error)]
pub enum StoreLookupError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
