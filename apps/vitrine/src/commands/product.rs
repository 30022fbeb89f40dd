//! # Product Commands
//!
//! Catalog browsing: listing by category, product detail, refresh.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category chips:  [all 20] [electronics 6] [jewelery 4] ...            │
//! │        │                                                                │
//! │        │ list_products(&filter)   → fetches, returns CatalogResponse    │
//! │        ▼                                                                │
//! │  Product grid ──── tap ────► get_product(id) → ProductDto               │
//! │        ▲                         (detail screen, with cart quantity)    │
//! │        │                                                                │
//! │  pull down ──► refresh_catalog()                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use vitrine_core::{CategoryFilter, Product, ProductId};

use crate::error::ApiError;
use crate::state::{CategoryCount, Store};

/// A product as shown on the detail screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(flatten)]
    pub product: Product,

    /// Units of this product already in the cart
    pub cart_quantity: i64,
}

/// Everything the catalog screen needs in one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    /// Active filter tag ("all" or a category)
    pub filter: String,
    pub products: Vec<Product>,
    pub categories: Vec<CategoryCount>,
    pub loading: bool,
    /// Message of the last failed fetch, if it has not been cleared
    pub error: Option<String>,
}

impl CatalogResponse {
    fn from_store(store: &Store, filter: &CategoryFilter) -> Self {
        let catalog = store.catalog();
        CatalogResponse {
            filter: filter.to_string(),
            products: filter.apply(&catalog.products).into_iter().cloned().collect(),
            categories: store.category_counts(),
            loading: catalog.loading,
            error: catalog.error,
        }
    }
}

/// Fetches the products for a category and returns the catalog screen.
///
/// A failed fetch is not an `Err`: the response carries the previous
/// products and the error message, as the screen shows both.
pub async fn list_products(store: &Store, filter: &CategoryFilter) -> CatalogResponse {
    debug!(%filter, "list_products command");
    // Outcome lands in store state
    let _ = store.fetch_products_by_category(filter).await;
    CatalogResponse::from_store(store, filter)
}

/// Returns the catalog screen from what is already loaded. No fetch.
pub fn get_catalog(store: &Store, filter: &CategoryFilter) -> CatalogResponse {
    debug!(%filter, "get_catalog command");
    CatalogResponse::from_store(store, filter)
}

/// Re-fetches the full catalog (pull-to-refresh).
pub async fn refresh_catalog(store: &Store, filter: &CategoryFilter) -> CatalogResponse {
    debug!("refresh_catalog command");
    let _ = store.refresh().await;
    CatalogResponse::from_store(store, filter)
}

/// Re-fetches the category list and returns per-category counts.
pub async fn get_categories(store: &Store) -> Vec<CategoryCount> {
    debug!("get_categories command");
    store.fetch_categories().await;
    store.category_counts()
}

/// Gets a single product for the detail screen.
///
/// Looks in the loaded catalog first, then asks the catalog service.
pub async fn get_product(store: &Store, product_id: ProductId) -> Result<ProductDto, ApiError> {
    debug!(%product_id, "get_product command");

    let product = store.find_product(product_id).await?;
    Ok(ProductDto {
        cart_quantity: store.cart_quantity(product.id),
        product,
    })
}
