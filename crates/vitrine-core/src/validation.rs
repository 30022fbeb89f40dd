//! # Validation Module
//!
//! Input validation utilities for Vitrine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog decode (vitrine-catalog)                             │
//! │  ├── JSON shape (serde)                                                │
//! │  └── THIS MODULE: price, rating, title rules                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store operations (apps/vitrine)                              │
//! │  └── THIS MODULE: quantities typed by the shopper                      │
//! │                                                                         │
//! │  A record that fails layer 1 rejects the whole catalog response.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrine_core::validation::{validate_quantity, validate_rating};
//!
//! assert!(validate_quantity(3).is_ok());
//! assert!(validate_rating(4.7).is_ok());
//! assert!(validate_rating(5.5).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_RATING;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a category tag.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must not contain `/` (it becomes a URL path segment)
///
/// ## Returns
/// The trimmed tag.
pub fn validate_category_tag(tag: &str) -> ValidationResult<String> {
    let tag = tag.trim();

    if tag.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if tag.contains('/') {
        return Err(ValidationError::InvalidFormat {
            field: "category".to_string(),
            reason: "must not contain '/'".to_string(),
        });
    }

    Ok(tag.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value entered by the shopper.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates an average rating.
///
/// ## Rules
/// - Must be finite
/// - Must lie within 0 to 5 inclusive
pub fn validate_rating(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || !(0.0..=MAX_RATING).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0.0,
            max: MAX_RATING,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
