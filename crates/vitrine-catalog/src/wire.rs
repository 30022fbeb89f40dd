//! # Wire Records
//!
//! JSON shapes returned by the catalog API, and their conversion into
//! domain [`Product`]s.
//!
//! ```text
//! {"id":1,"title":"...","price":109.95,...}      ProductRecord
//!                │                                     │
//!                │  serde_json                         │ TryFrom
//!                ▼                                     ▼
//!          ProductRecord  ──── price: f64 ────►  Product { price: Money(10995) }
//! ```
//!
//! Records that break a domain rule (negative price, rating above 5, blank
//! title) fail conversion, and the whole response is rejected with it.

use serde::{Deserialize, Serialize};
use vitrine_core::validation::{validate_rating, validate_title};
use vitrine_core::{Money, Product, ProductId, Rating};

use crate::error::{CatalogError, CatalogResult};

/// Review aggregate as sent by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub rate: f64,
    pub count: u32,
}

/// One product as sent by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "missing_rating")]
    pub rating: RatingRecord,
}

fn missing_rating() -> RatingRecord {
    RatingRecord { rate: 0.0, count: 0 }
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> CatalogResult<Self> {
        validate_title(&record.title)?;
        validate_rating(record.rating.rate)?;
        let price = Money::from_decimal(record.price)?;

        Ok(Product {
            id: ProductId::new(record.id),
            title: record.title,
            price,
            description: record.description,
            category: record.category,
            image: record.image,
            rating: Rating::new(record.rating.rate, record.rating.count),
        })
    }
}

/// Decodes a product list body. One bad record fails the whole list.
pub fn decode_products(body: &str) -> CatalogResult<Vec<Product>> {
    let records: Vec<ProductRecord> = serde_json::from_str(body)?;
    records.into_iter().map(Product::try_from).collect()
}

/// Decodes a single product body.
///
/// The FakeStore API answers an unknown id with `200` and an empty body;
/// that and a literal `null` decode to `None`.
pub fn decode_product(body: &str) -> CatalogResult<Option<Product>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let record: Option<ProductRecord> = serde_json::from_str(body)?;
    record.map(Product::try_from).transpose()
}

/// Decodes a category list body, keeping the server's order.
pub fn decode_categories(body: &str) -> CatalogResult<Vec<String>> {
    Ok(serde_json::from_str(body)?)
}
