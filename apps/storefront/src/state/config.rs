//! # Configuration
//!
//! Storefront settings loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_CATALOG_URL=https://catalog.internal/products           │
//! │     STOREFRONT_STORE_NAME="Ali's Shop"                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.storefront/ (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     fakestoreapi.com catalog, "Storefront"                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [catalog]
//! endpoint = "https://fakestoreapi.com/products"
//!
//! [store]
//! name = "Storefront"
//! contact_email = "hello@example.com"
//! instagram = "@storefront"
//! ```
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_catalog::{http::parse_endpoint, DEFAULT_CATALOG_URL};
use tracing::{debug, info};

use crate::error::ConfigError;

pub const ENV_CATALOG_URL: &str = "STOREFRONT_CATALOG_URL";
pub const ENV_STORE_NAME: &str = "STOREFRONT_STORE_NAME";
pub const ENV_CONTACT_EMAIL: &str = "STOREFRONT_CONTACT_EMAIL";
pub const ENV_INSTAGRAM: &str = "STOREFRONT_INSTAGRAM";

// =============================================================================
// Sections
// =============================================================================

/// Where the product list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Endpoint returning the JSON product array.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            endpoint: default_endpoint(),
        }
    }
}

/// Shop details shown on the about view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default)]
    pub contact_email: Option<String>,

    #[serde(default)]
    pub instagram: Option<String>,
}

fn default_store_name() -> String {
    "Storefront".to_string()
}

impl Default for StoreInfo {
    fn default() -> Self {
        StoreInfo {
            name: default_store_name(),
            contact_email: None,
            instagram: None,
        }
    }
}

// =============================================================================
// Storefront Config
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub store: StoreInfo,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`storefront.toml`), if it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`StorefrontConfig::load`], reading overrides from `lookup`
    /// instead of the process environment.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Checks that the catalog endpoint is an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_endpoint(&self.catalog.endpoint)?;
        Ok(())
    }

    /// Applies overrides from any key lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_CATALOG_URL) {
            debug!(url = %url, "Overriding catalog endpoint from environment");
            self.catalog.endpoint = url;
        }

        if let Some(name) = get(ENV_STORE_NAME) {
            self.store.name = name;
        }

        if let Some(email) = get(ENV_CONTACT_EMAIL) {
            self.store.contact_email = Some(email);
        }

        if let Some(handle) = get(ENV_INSTAGRAM) {
            self.store.instagram = Some(handle);
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Returns the catalog endpoint.
    pub fn catalog_endpoint(&self) -> &str {
        &self.catalog.endpoint
    }
}
