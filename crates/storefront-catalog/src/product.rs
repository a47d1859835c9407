//! Product listing model.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::money::{Currency, Money};

/// A product as returned by `/public/products`.
///
/// Every field is optional on the wire; accessors supply the documented
/// zero values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "de::opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Selling price.
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub base_price: Option<f64>,
    /// Price before the sale.
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub regular_price: Option<f64>,
    #[serde(default, deserialize_with = "de::flag")]
    pub has_sale: bool,
    /// 0-100.
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub discount_percentage: Option<f64>,
    /// 0-5.
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_count")]
    pub review_count: Option<u64>,
}

impl Product {
    /// Display name, defaulting to "Product".
    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Product")
    }

    /// Slug, defaulting to empty.
    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or("")
    }

    /// Average rating clamped to 0-5, defaulting to 0.
    pub fn rating(&self) -> f64 {
        self.avg_rating.unwrap_or(0.0).clamp(0.0, 5.0)
    }

    /// Review count, defaulting to 0.
    pub fn review_count(&self) -> u64 {
        self.review_count.unwrap_or(0)
    }

    /// Selling price, defaulting to zero. Negative prices are clamped.
    pub fn price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.base_price.unwrap_or(0.0).max(0.0), currency)
    }

    /// Pre-sale price, defaulting to zero.
    pub fn regular_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.regular_price.unwrap_or(0.0).max(0.0), currency)
    }

    /// A sale is shown only when flagged and the regular price is not
    /// below the selling price.
    pub fn sale_active(&self) -> bool {
        self.has_sale && self.regular_price.unwrap_or(0.0) >= self.base_price.unwrap_or(0.0)
    }

    /// Discount percentage rounded and clamped to 0-100, if present.
    pub fn discount_percentage(&self) -> Option<u8> {
        self.discount_percentage
            .map(|p| p.clamp(0.0, 100.0).round() as u8)
            .filter(|p| *p > 0)
    }

    /// Amount saved during an active sale.
    pub fn savings(&self, currency: Currency) -> Option<Money> {
        if !self.sale_active() {
            return None;
        }
        self.regular_price(currency).try_subtract(&self.price(currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product() {
        let json = r#"{
            "id": 42,
            "slug": "whey-gold",
            "name": "Whey Gold",
            "image": "https://cdn.test/whey.jpg",
            "basePrice": 2499,
            "regularPrice": "2999",
            "hasSale": true,
            "discountPercentage": 16.7,
            "avgRating": 4.4,
            "reviewCount": 31
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_deref(), Some("42"));
        assert_eq!(p.regular_price, Some(2999.0));
        assert!(p.sale_active());
        assert_eq!(p.discount_percentage(), Some(17));
        assert_eq!(p.review_count(), 31);
        assert_eq!(
            p.savings(Currency::INR),
            Some(Money::new(50000, Currency::INR))
        );
    }

    #[test]
    fn test_empty_product_defaults() {
        let p: Product = serde_json::from_str("{}").unwrap();
        assert_eq!(p.name(), "Product");
        assert_eq!(p.slug(), "");
        assert_eq!(p.rating(), 0.0);
        assert_eq!(p.review_count(), 0);
        assert!(p.price(Currency::INR).is_zero());
        assert!(!p.sale_active());
        assert_eq!(p.discount_percentage(), None);
    }

    #[test]
    fn test_null_fields_default() {
        let p: Product = serde_json::from_str(
            r#"{"id": "p1", "name": null, "slug": null, "hasSale": null, "reviewCount": null}"#,
        )
        .unwrap();
        assert_eq!(p.name(), "Product");
        assert_eq!(p.slug(), "");
        assert!(!p.has_sale);
        assert!(!p.sale_active());
        assert_eq!(p.review_count(), 0);
    }

    #[test]
    fn test_sale_needs_higher_regular_price() {
        let p = Product {
            base_price: Some(500.0),
            regular_price: Some(400.0),
            has_sale: true,
            ..Product::default()
        };
        assert!(!p.sale_active());
        assert_eq!(p.savings(Currency::INR), None);
    }

    #[test]
    fn test_rating_is_clamped() {
        let p = Product {
            avg_rating: Some(7.0),
            ..Product::default()
        };
        assert_eq!(p.rating(), 5.0);
    }
}
