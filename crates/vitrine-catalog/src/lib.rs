//! # vitrine-catalog: Remote Product Catalog
//!
//! Read-only access to the product catalog over HTTP.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Request Flow                            │
//! │                                                                         │
//! │   Store                                                                 │
//! │     │  fetch_products_by_category(&filter)                              │
//! │     ▼                                                                   │
//! │   dyn CatalogSource ───────► HttpCatalog                                │
//! │                                 │  GET {base}/products/category/{tag}   │
//! │                                 ▼                                       │
//! │                              reqwest ──► remote API                     │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                              wire::decode_products                      │
//! │                                 │  ProductRecord ──► Product            │
//! │                                 ▼                                       │
//! │                       Ok(Vec<Product>) / Err(CatalogError)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`source`] - The `CatalogSource` trait the store depends on
//! - [`client`] - `HttpCatalog`, the reqwest implementation
//! - [`wire`] - JSON records and their conversion to domain types
//! - [`config`] - Base URL and timeout, from TOML and environment
//! - [`error`] - `CatalogError` and the shopper-facing message
//!
//! ## Example
//! ```rust,no_run
//! use vitrine_catalog::{CatalogConfig, CatalogSource, HttpCatalog};
//!
//! # async fn demo() -> vitrine_catalog::CatalogResult<()> {
//! let config = CatalogConfig::load_or_default(None);
//! let catalog = HttpCatalog::new(&config)?;
//! let products = catalog.fetch_all_products().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod wire;

pub use client::HttpCatalog;
pub use config::{ApiSettings, CatalogConfig, DEFAULT_BASE_URL};
pub use error::{CatalogError, CatalogResult, FETCH_FAILED_MESSAGE};
pub use source::CatalogSource;
