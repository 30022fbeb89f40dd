//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vitrine-catalog errors (separate crate)                               │
//! │  └── CatalogError     - Network / response / decode failures           │
//! │                                                                         │
//! │  View layer errors (in app)                                            │
//! │  └── ApiError         - What the storefront sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │                         CatalogError ┴─► ApiError → View Layer         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart lookups that miss are NOT errors: removing or adjusting a product
//! that is not in the cart is a silent no-op.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product is not part of the loaded catalog.
    ///
    /// ## When This Occurs
    /// - The view asks for details of an id that was never fetched
    /// - The catalog was re-fetched for another category in the meantime
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout requested with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised for user input (quantities) and for catalog records that do not
/// satisfy the domain rules (negative price, rating above 5).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. NaN price, non-numeric id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
