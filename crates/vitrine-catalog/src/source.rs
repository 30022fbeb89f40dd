//! The seam between the store and wherever products come from.

use async_trait::async_trait;
use vitrine_core::{CategoryFilter, Product, ProductId};

use crate::error::CatalogResult;

/// A read-only product catalog.
///
/// Every call is one independent request: no retries, no caching. The store
/// holds an `Arc<dyn CatalogSource>` so tests can swap in a scripted double.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches every product, in server order.
    async fn fetch_all_products(&self) -> CatalogResult<Vec<Product>>;

    /// Fetches the products of one category.
    ///
    /// `CategoryFilter::All` is the same request as [`fetch_all_products`].
    ///
    /// [`fetch_all_products`]: CatalogSource::fetch_all_products
    async fn fetch_products_by_category(
        &self,
        filter: &CategoryFilter,
    ) -> CatalogResult<Vec<Product>>;

    /// Fetches the category tags, in server order.
    async fn fetch_categories(&self) -> CatalogResult<Vec<String>>;

    /// Fetches one product by id; `None` when the catalog has no such id.
    async fn fetch_product(&self, id: ProductId) -> CatalogResult<Option<Product>>;
}
