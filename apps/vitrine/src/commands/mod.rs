//! # Commands Module
//!
//! Everything the view layer may call. Each command takes the [`Store`]
//! and returns a serializable DTO or an [`ApiError`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog listing, detail, refresh, categories
//! ├── cart.rs      ◄─── Cart manipulation
//! └── checkout.rs  ◄─── Simulated checkout
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  View (shell, or a JS front end via the exported bindings)             │
//! │         │  add <id> 2                                                   │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(&store, id, Some(2))                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<CartResponse, ApiError>  ──► serde ──► { items, totals }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Store`]: crate::state::Store
//! [`ApiError`]: crate::error::ApiError

pub mod cart;
pub mod checkout;
pub mod product;

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory catalog for command and view tests.

    use std::collections::BTreeSet;
    use std::sync::Arc;

    use async_trait::async_trait;
    use vitrine_catalog::{CatalogError, CatalogResult, CatalogSource};
    use vitrine_core::{CategoryFilter, Money, Product, ProductId, Rating};

    use crate::state::{ConfigState, Store};

    pub const P1: ProductId = ProductId::new(1);
    pub const P2: ProductId = ProductId::new(2);
    pub const P3: ProductId = ProductId::new(3);

    /// Serves a fixed product list; `None` fails every request.
    pub struct FixedCatalog {
        products: Option<Vec<Product>>,
    }

    impl FixedCatalog {
        fn all(&self) -> CatalogResult<Vec<Product>> {
            self.products
                .clone()
                .ok_or_else(|| CatalogError::Network("connection refused".into()))
        }
    }

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn fetch_all_products(&self) -> CatalogResult<Vec<Product>> {
            self.all()
        }

        async fn fetch_products_by_category(
            &self,
            filter: &CategoryFilter,
        ) -> CatalogResult<Vec<Product>> {
            Ok(self
                .all()?
                .into_iter()
                .filter(|p| filter.matches(p))
                .collect())
        }

        async fn fetch_categories(&self) -> CatalogResult<Vec<String>> {
            let tags: BTreeSet<String> = self.all()?.into_iter().map(|p| p.category).collect();
            Ok(tags.into_iter().collect())
        }

        async fn fetch_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
            Ok(self.all()?.into_iter().find(|p| p.id == id))
        }
    }

    pub fn sample_products() -> Vec<Product> {
        vec![
            product(P1, "Fjallraven Backpack", 10995, "men's clothing"),
            product(P2, "Silver Dragon Chain", 2230, "jewelery"),
            product(P3, "Mens Cotton Jacket", 5599, "men's clothing"),
        ]
    }

    fn product(id: ProductId, title: &str, cents: i64, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: Money::from_cents(cents),
            description: format!("{} description", title),
            category: category.to_string(),
            image: format!("https://img.example/{}.jpg", id),
            rating: Rating::new(3.9, 120),
        }
    }

    /// A store after `init()` against the given products.
    pub async fn store_with_products(products: Option<Vec<Product>>) -> Store {
        let store = Store::new(Arc::new(FixedCatalog { products }), ConfigState::default());
        store.init().await;
        store
    }

    pub async fn loaded_store() -> Store {
        store_with_products(Some(sample_products())).await
    }
}
