//! # Catalog Error Types
//!
//! Error types for catalog operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Network      │  │    Response     │  │        Decode           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  DNS, connect,  │  │  non-2xx HTTP   │  │  malformed JSON         │ │
//! │  │  TLS, timeout,  │  │  status         │  │  invalid record         │ │
//! │  │  body read      │  │                 │  │  (negative price, ...)  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │  Configuration  │   Store only ever shows user_message() to the     │
//! │  │  InvalidConfig  │   shopper; the three fetch buckets collapse into  │
//! │  │  ConfigLoad...  │   one line of text.                               │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// What the shopper sees when any catalog fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Could not load products. Refresh to try again.";

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type covering all possible fetch and config failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Fetch Errors
    // =========================================================================
    /// The request could not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Response { status: u16, message: String },

    /// The body was not the expected JSON, or a record broke a domain rule.
    #[error("Invalid catalog response: {0}")]
    Decode(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid catalog configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),
}

impl CatalogError {
    /// True for the three errors a fetch can produce.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Network(_) | CatalogError::Response { .. } | CatalogError::Decode(_)
        )
    }

    /// The single message the storefront shows for a failed fetch.
    ///
    /// Network, response and decode failures are not told apart here; the
    /// detail goes to the logs.
    pub fn user_message(&self) -> String {
        if self.is_fetch_error() {
            FETCH_FAILED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

/// Transport failures. Status codes are checked before the body is read, so
/// a reqwest error here never carries one.
impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

impl From<vitrine_core::ValidationError> for CatalogError {
    fn from(err: vitrine_core::ValidationError) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidConfig(format!("invalid base URL: {}", err))
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}
