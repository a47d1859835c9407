//! Category listing model.

use serde::{Deserialize, Serialize};

use crate::de;

/// Relation counts attached by the API (`_count.products`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryCounts {
    /// Products filed under the category.
    #[serde(default, deserialize_with = "de::opt_count")]
    pub products: Option<u64>,
}

/// A product category as returned by `/public/categories`.
///
/// Read-only: the storefront never mutates catalog data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    #[serde(default, deserialize_with = "de::id")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    /// URL-safe unique slug.
    #[serde(default, deserialize_with = "de::text")]
    pub slug: String,
    /// Marketing description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image key relative to the asset host, or an absolute URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Flat product count, when the API sends one.
    #[serde(default, deserialize_with = "de::opt_count")]
    pub product_count: Option<u64>,
    /// Nested relation counts.
    #[serde(default, rename = "_count", skip_serializing_if = "Option::is_none")]
    pub counts: Option<CategoryCounts>,
    /// Premium flag.
    #[serde(default)]
    pub is_premium: Option<bool>,
}

impl Category {
    /// Create a category with just a name and slug.
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Number of products, from either count shape, defaulting to zero.
    pub fn product_count(&self) -> u64 {
        self.product_count
            .or_else(|| self.counts.as_ref().and_then(|c| c.products))
            .unwrap_or(0)
    }

    /// Premium flag, defaulting to false.
    pub fn is_premium(&self) -> bool {
        self.is_premium.unwrap_or(false)
    }

    /// Description if it has any visible text.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
