//! Storefront configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::{AssetResolver, CategoryPresenter, Currency, ProductPresenter};
use storefront_data::{Fetcher, Transport};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Environment variable overriding the asset host.
pub const ASSET_URL_ENV: &str = "STOREFRONT_ASSET_URL";

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Remote product API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Image storage host.
    #[serde(default)]
    pub assets: AssetConfig,

    /// Display preferences.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL that `/public/...` paths are appended to.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

/// Asset host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Prefix for relative image keys.
    #[serde(default = "default_asset_base_url")]
    pub base_url: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_url: default_asset_base_url(),
        }
    }
}

fn default_asset_base_url() -> String {
    "https://desirediv-storage.blr1.digitaloceanspaces.com/".to_string()
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code for prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

impl StoreConfig {
    /// Parse an inline TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StoreConfig =
            toml::from_str(content).context("Failed to parse storefront config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a `.toml` or `.json` file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: StoreConfig = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (e.g. `std::env::var`).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(url) = lookup(ASSET_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.assets.base_url = url;
        }
        self
    }

    /// Reject blank or scheme-less URLs and unknown currencies.
    pub fn validate(&self) -> Result<()> {
        check_url("api.base_url", &self.api.base_url)?;
        check_url("assets.base_url", &self.assets.base_url)?;
        if Currency::from_code(&self.display.currency).is_none() {
            bail!("display.currency: unsupported currency {:?}", self.display.currency);
        }
        Ok(())
    }

    /// Display currency.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.display.currency).unwrap_or_default()
    }

    pub fn asset_resolver(&self) -> AssetResolver {
        AssetResolver::new(self.assets.base_url.clone())
    }

    pub fn category_presenter(&self) -> CategoryPresenter {
        CategoryPresenter::new(self.asset_resolver())
    }

    pub fn product_presenter(&self) -> ProductPresenter {
        ProductPresenter::new(self.asset_resolver(), self.currency())
    }

    /// A fetcher against the configured API.
    pub fn fetcher<T: Transport>(&self, transport: T) -> Fetcher<T> {
        Fetcher::new(transport, self.api.base_url.clone())
    }
}

fn check_url(field: &str, url: &str) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        bail!("{}: must not be empty", field);
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("{}: expected an http(s) URL, got {:?}", field, url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency(), Currency::INR);
    }

    #[test]
    fn test_parse_toml() {
        let config = StoreConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://api.shop.test/api"

            [assets]
            base_url = "https://cdn.shop.test"

            [display]
            currency = "usd"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.shop.test/api");
        assert_eq!(config.currency(), Currency::USD);
        assert_eq!(
            config.asset_resolver().resolve(Some("a.jpg"), "x"),
            "https://cdn.shop.test/a.jpg"
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = StoreConfig::from_toml_str("[api]\nbase_url = \"https://api.test\"\n").unwrap();
        assert_eq!(config.assets, AssetConfig::default());
        assert_eq!(config.display.currency, "INR");
    }

    #[test]
    fn test_rejects_schemeless_url() {
        let err = StoreConfig::from_toml_str("[api]\nbase_url = \"api.test\"\n").unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_rejects_unknown_currency() {
        let err = StoreConfig::from_toml_str("[display]\ncurrency = \"XYZ\"\n").unwrap_err();
        assert!(err.to_string().contains("currency"));
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::default().with_overrides(|key| match key {
            API_URL_ENV => Some("https://override.test/api".to_string()),
            ASSET_URL_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "https://override.test/api");
        assert_eq!(config.assets, AssetConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = StoreConfig::load("/nonexistent/storefront.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
