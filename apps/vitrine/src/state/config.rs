//! # Configuration State
//!
//! Storefront display and pricing settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VITRINE_CURRENCY_SYMBOL=€                                          │
//! │     VITRINE_FREE_SHIPPING_CENTS=10000                                  │
//! │     VITRINE_SHIPPING_FEE_CENTS=599                                     │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     USD, free shipping above $100.00, otherwise $5.99                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog connection settings live in `vitrine_catalog::CatalogConfig`.

use serde::{Deserialize, Serialize};
use tracing::warn;
use vitrine_core::{Money, ShippingPolicy};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display). Amounts are always in cents of a
    /// two-decimal currency.
    pub currency_symbol: String,

    /// Shipping rules applied to cart totals and checkout
    pub shipping: ShippingPolicy,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: USD ($)
    /// - Shipping: free above $100.00, otherwise $5.99
    fn default() -> Self {
        ConfigState {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            shipping: ShippingPolicy::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VITRINE_CURRENCY_SYMBOL`: Override the display symbol
    /// - `VITRINE_FREE_SHIPPING_CENTS`: Free-shipping threshold in cents
    /// - `VITRINE_SHIPPING_FEE_CENTS`: Flat fee in cents
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(symbol) = std::env::var("VITRINE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(cents) = cents_from_env("VITRINE_FREE_SHIPPING_CENTS") {
            config.shipping.free_threshold = Money::from_cents(cents);
        }

        if let Some(cents) = cents_from_env("VITRINE_SHIPPING_FEE_CENTS") {
            config.shipping.flat_fee = Money::from_cents(cents);
        }

        config
    }

    /// Formats a money amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / 100).unsigned_abs(),
            (cents % 100).unsigned_abs()
        )
    }
}

/// Reads a non-negative cent amount, ignoring values that do not parse.
fn cents_from_env(key: &str) -> Option<i64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<i64>() {
        Ok(cents) if cents >= 0 => Some(cents),
        _ => {
            warn!(key, value = %raw, "Ignoring invalid cent amount");
            None
        }
    }
}
