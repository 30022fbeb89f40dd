//! # Catalog State
//!
//! Products, categories and fetch status as last reported by the catalog.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog                                                                │
//! │  ├── products:   Vec<Product>   replaced wholesale by each fetch        │
//! │  ├── categories: Vec<String>    replaced by fetch_categories            │
//! │  ├── loading:    bool           true while a product fetch is pending   │
//! │  └── error:      Option<String> shopper-facing message of last failure  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use vitrine_core::{Product, ProductId};

/// Catalog data owned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Catalog {
    /// Finds a loaded product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    /// Nothing loaded yet; `loading` stays set until the first fetch settles.
    fn default() -> Self {
        Catalog {
            products: Vec::new(),
            categories: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Shared handle to the session's catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    ///
    /// Never call this from inside a pending fetch; lock, update, release.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }
}
