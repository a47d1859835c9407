//! Build-time store configuration.

use storefront_core::config::{API_URL_ENV, ASSET_URL_ENV};
use storefront_core::StoreConfig;

const EMBEDDED_CONFIG: &str = include_str!("../storefront.toml");

/// The embedded `storefront.toml`, with build-time overrides applied.
///
/// Falls back to the built-in defaults if the result does not validate.
pub fn store_config() -> StoreConfig {
    let config = match StoreConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config.with_overrides(build_var),
        Err(e) => {
            tracing::error!(error = %e, "embedded storefront.toml is invalid, using defaults");
            return StoreConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            tracing::error!(error = %e, "build-time override rejected, using defaults");
            StoreConfig::default()
        }
    }
}

fn build_var(key: &str) -> Option<String> {
    let value = match key {
        API_URL_ENV => option_env!("STOREFRONT_API_URL"),
        ASSET_URL_ENV => option_env!("STOREFRONT_ASSET_URL"),
        _ => None,
    };
    value.map(str::to_string)
}
