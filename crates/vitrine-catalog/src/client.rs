//! # HTTP Catalog Client
//!
//! reqwest-backed [`CatalogSource`].
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET {base}/products                    → Vec<ProductRecord>            │
//! │  GET {base}/products/category/{tag}     → Vec<ProductRecord>            │
//! │  GET {base}/products/categories         → Vec<String>                   │
//! │  GET {base}/products/{id}               → ProductRecord (or empty)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Mapping
//! ```text
//!   send() fails ──────────────────► Network
//!   status not 2xx ────────────────► Response { status, message }
//!   body read fails ───────────────► Network
//!   JSON / record invalid ─────────► Decode
//! ```

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;
use vitrine_core::{CategoryFilter, Product, ProductId};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::source::CatalogSource;
use crate::wire;

/// Catalog client speaking the FakeStore-style REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Builds a client from validated configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.api.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| CatalogError::InvalidConfig(format!("HTTP client: {}", e)))?;
        let base_url = Url::parse(config.base_url())?;

        Ok(HttpCatalog { client, base_url })
    }

    /// Builds a client with default settings against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> CatalogResult<Self> {
        Self::new(&CatalogConfig::with_base_url(base_url))
    }

    /// The base URL requests are built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CatalogError::InvalidConfig(format!("base_url cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues one GET and returns the body of a successful response.
    async fn get_text(&self, url: Url) -> CatalogResult<String> {
        debug!(%url, "GET");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            } else {
                message
            };
            warn!(%url, status = status.as_u16(), "Catalog request failed");
            return Err(CatalogError::Response {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_all_products(&self) -> CatalogResult<Vec<Product>> {
        let body = self.get_text(self.endpoint(&["products"])?).await?;
        let products = wire::decode_products(&body)?;
        debug!(count = products.len(), "Fetched all products");
        Ok(products)
    }

    async fn fetch_products_by_category(
        &self,
        filter: &CategoryFilter,
    ) -> CatalogResult<Vec<Product>> {
        let Some(tag) = filter.tag() else {
            return self.fetch_all_products().await;
        };

        let url = self.endpoint(&["products", "category", tag])?;
        let body = self.get_text(url).await?;
        let products = wire::decode_products(&body)?;
        debug!(category = %tag, count = products.len(), "Fetched category products");
        Ok(products)
    }

    async fn fetch_categories(&self) -> CatalogResult<Vec<String>> {
        let body = self
            .get_text(self.endpoint(&["products", "categories"])?)
            .await?;
        wire::decode_categories(&body)
    }

    async fn fetch_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let segment = id.to_string();
        let url = self.endpoint(&["products", &segment])?;
        let body = match self.get_text(url).await {
            Ok(body) => body,
            Err(CatalogError::Response { status: 404, .. }) => return Ok(None),
            Err(e) => return Err(e),
        };

        let product = wire::decode_product(&body)?;
        if product.is_none() {
            debug!(%id, "Product not in catalog");
        }
        Ok(product)
    }
}
