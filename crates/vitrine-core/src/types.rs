//! # Domain Types
//!
//! Core domain types used throughout Vitrine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Rating      │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (integer)   │   │  rate (0-5)     │   │  All            │       │
//! │  │  title          │   │  count (>= 0)   │   │  Category(tag)  │       │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  category       │                                                    │
//! │  │  image (URI)    │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once fetched: the cart keeps its own frozen copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_category_tag;
use crate::ALL_CATEGORIES;

// =============================================================================
// Product Id
// =============================================================================

/// Integer identifier assigned by the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(i64);

impl ProductId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "product id".to_string(),
                reason: format!("'{}' is not an integer", s.trim()),
            })
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Rating
// =============================================================================

/// Aggregate review score for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, 0 to 5 inclusive.
    pub rate: f64,

    /// Number of reviews behind the average.
    pub count: u32,
}

impl Rating {
    pub const fn new(rate: f64, count: u32) -> Self {
        Rating { rate, count }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::new(0.0, 0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product from the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (assigned by the catalog).
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Unit price.
    pub price: Money,

    /// Long-form description for the detail screen.
    pub description: String,

    /// Category tag, e.g. "electronics" or "men's clothing".
    pub category: String,

    /// Image URI.
    pub image: String,

    /// Review aggregate.
    pub rating: Rating,
}

impl Product {
    /// Checks whether the product is in the given category.
    #[inline]
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The active category selection of the storefront.
///
/// Held by the view, never by the store: switching filters changes what is
/// displayed (or fetched), not the product data itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CategoryFilter {
    /// Every product, regardless of category.
    #[default]
    All,

    /// One concrete category tag.
    Category(String),
}

impl CategoryFilter {
    /// Builds a filter from a raw tag; `"all"` (any case) and blank mean `All`.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(tag.to_string())
        }
    }

    /// Like [`from_tag`](CategoryFilter::from_tag), but rejects tags that
    /// cannot be sent as a single URL path segment.
    pub fn parse(tag: &str) -> Result<Self, ValidationError> {
        match CategoryFilter::from_tag(tag) {
            CategoryFilter::All => Ok(CategoryFilter::All),
            CategoryFilter::Category(tag) => {
                Ok(CategoryFilter::Category(validate_category_tag(&tag)?))
            }
        }
    }

    /// Returns the category tag, or `None` for `All`.
    pub fn tag(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(tag) => Some(tag),
        }
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Checks whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(tag) => product.in_category(tag),
        }
    }

    /// Applies the filter to a product list, preserving order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_CATEGORIES),
            CategoryFilter::Category(tag) => write!(f, "{}", tag),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(tag: &str) -> Self {
        CategoryFilter::from_tag(tag)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
