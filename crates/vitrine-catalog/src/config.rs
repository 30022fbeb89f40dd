//! # Catalog Configuration
//!
//! Where the catalog lives and how to talk to it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VITRINE_BASE_URL=https://fakestoreapi.com                          │
//! │     VITRINE_TIMEOUT_SECS=10                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/catalog.toml (Linux)                          │
//! │     ~/Library/Application Support/com.vitrine.storefront/catalog.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     https://fakestoreapi.com, no timeout                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! [api]
//! base_url = "https://fakestoreapi.com"
//! timeout_secs = 10        # optional; omitted = no timeout
//! user_agent = "vitrine/0.1"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Public FakeStore API, the catalog the storefront was built against.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

// =============================================================================
// API Settings
// =============================================================================

/// Connection settings for the remote catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL; endpoints are appended (`{base_url}/products`, ...).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds. `None` means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("vitrine/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// =============================================================================
// Catalog Config
// =============================================================================

/// Complete catalog client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

impl CatalogConfig {
    /// Creates a config pointing at a specific catalog.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            api: ApiSettings {
                base_url: base_url.into(),
                ..ApiSettings::default()
            },
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (catalog.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load catalog config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        let url = Url::parse(&self.api.base_url)?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(CatalogError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if url.cannot_be_a_base() {
            return Err(CatalogError::InvalidConfig(format!(
                "base_url cannot be used as a base: {}",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == Some(0) {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `VITRINE_*` overrides read through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("VITRINE_BASE_URL") {
            debug!(url = %url, "Overriding catalog base URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = var("VITRINE_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = Some(secs),
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric VITRINE_TIMEOUT_SECS"),
            }
        }

        if let Some(agent) = var("VITRINE_USER_AGENT") {
            self.api.user_agent = agent;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vitrine", "storefront")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Returns the request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), None);
        assert!(config.api.user_agent.starts_with("vitrine/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = CatalogConfig::with_base_url("ftp://example.com");
        assert!(config.validate().is_err());

        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        config.api.timeout_secs = Some(0);
        assert!(config.validate().is_err());

        config.api.timeout_secs = Some(5);
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = CatalogConfig::with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://catalog.internal:9000\"\ntimeout_secs = 3"
        )
        .unwrap();

        let config = CatalogConfig::load(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.base_url(), "http://catalog.internal:9000");
        assert_eq!(config.api.timeout_secs, Some(3));
        // Missing keys fall back to defaults
        assert!(config.api.user_agent.starts_with("vitrine/"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.api.user_agent, CatalogConfig::default().api.user_agent);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config: CatalogConfig =
            toml::from_str("[api]\nbase_url = \"http://from-file:9000\"\ntimeout_secs = 3")
                .unwrap();

        config.apply_overrides(env(&[
            ("VITRINE_BASE_URL", "http://from-env:7000"),
            ("VITRINE_TIMEOUT_SECS", "12"),
            ("VITRINE_USER_AGENT", "kiosk/2"),
        ]));

        assert_eq!(config.base_url(), "http://from-env:7000");
        assert_eq!(config.timeout(), Some(Duration::from_secs(12)));
        assert_eq!(config.api.user_agent, "kiosk/2");
    }

    #[test]
    fn test_non_numeric_timeout_override_is_ignored() {
        let mut config = CatalogConfig::default();
        config.api.timeout_secs = Some(3);

        config.apply_overrides(env(&[("VITRINE_TIMEOUT_SECS", "soon")]));

        assert_eq!(config.api.timeout_secs, Some(3));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let result = CatalogConfig::load(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(CatalogError::ConfigLoadFailed(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let config = CatalogConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("base_url"));
    }
}
