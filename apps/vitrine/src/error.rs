//! # API Error Type
//!
//! The error every command returns to the view layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Error Propagation                                │
//! │                                                                         │
//! │  vitrine-core         vitrine-catalog          commands                 │
//! │  ────────────         ───────────────          ────────                 │
//! │  CoreError     ──┐                                                      │
//! │  ValidationError ┼──────────────────────►  ApiError { code, message }  │
//! │                  │    CatalogError ─────►        │                      │
//! │                  │                               ▼                      │
//! │                  │                         view renders message         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use vitrine_catalog::CatalogError;
use vitrine_core::CoreError;

use crate::state::StoreLookupError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog could not be reached or understood
    CatalogError,

    /// Cart operation failed (e.g. checkout of an empty cart)
    CartError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::EmptyCart => ApiError::cart("Your cart is empty"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts catalog errors to API errors.
///
/// Fetch failures all read the same to the shopper; the detail is logged.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        if err.is_fetch_error() {
            tracing::error!("Catalog request failed: {}", err);
            ApiError::new(ErrorCode::CatalogError, err.user_message())
        } else {
            ApiError::internal(err.to_string())
        }
    }
}

impl From<StoreLookupError> for ApiError {
    fn from(err: StoreLookupError) -> Self {
        match err {
            StoreLookupError::Core(e) => e.into(),
            StoreLookupError::Catalog(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
