//! Image reference resolution against the asset host.

use serde::{Deserialize, Serialize};

/// Shown when a category has no image.
pub const CATEGORY_PLACEHOLDER: &str = "/placeholder.svg?height=300&width=400";

/// Shown when a product has no image.
pub const PRODUCT_PLACEHOLDER: &str = "/product-placeholder.jpg";

/// Turns image keys from the API into fully-qualified URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetResolver {
    base_url: String,
}

impl AssetResolver {
    /// Create a resolver for the given storage host.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The storage host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an image reference.
    ///
    /// - absent or blank: `placeholder`, untouched
    /// - already absolute (has a scheme, or `//host/...`): untouched
    /// - otherwise: prefixed with the asset base
    pub fn resolve(&self, reference: Option<&str>, placeholder: &str) -> String {
        let reference = match reference.map(str::trim) {
            Some(r) if !r.is_empty() => r,
            _ => return placeholder.to_string(),
        };

        if has_scheme(reference) || reference.starts_with("//") {
            return reference.to_string();
        }

        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            reference.trim_start_matches('/')
        )
    }
}

/// RFC 3986 scheme check: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
pub fn has_scheme(reference: &str) -> bool {
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
