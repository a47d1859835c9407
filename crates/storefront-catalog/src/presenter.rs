//! Card presenters: pure mappings from one listing item to a renderable card.

use std::time::Duration;

use crate::asset::{AssetResolver, CATEGORY_PLACEHOLDER, PRODUCT_PLACEHOLDER};
use crate::money::Currency;
use crate::{Category, Product};

/// Copy shown when a category has no description.
pub const DEFAULT_CATEGORY_DESCRIPTION: &str =
    "Discover premium quality products in this carefully curated category";

/// Entrance delay step between consecutive category cards.
pub const CATEGORY_STAGGER: Duration = Duration::from_millis(100);

/// Entrance delay step between consecutive product cards.
pub const PRODUCT_STAGGER: Duration = Duration::from_millis(50);

/// Maps one item and its position to a card.
pub trait Presenter {
    type Item;
    type Card;

    /// Present a single item.
    fn present(&self, item: &Self::Item, index: usize) -> Self::Card;

    /// Present every item, in order.
    fn present_all(&self, items: &[Self::Item]) -> Vec<Self::Card> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.present(item, index))
            .collect()
    }
}

/// Staggered entrance timing. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub index: usize,
    pub delay: Duration,
}

impl Stagger {
    pub fn new(index: usize, step: Duration) -> Self {
        let factor = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            index,
            delay: step.saturating_mul(factor),
        }
    }

    /// CSS `animation-delay` value.
    pub fn css_delay(&self) -> String {
        format!("{}ms", self.delay.as_millis())
    }
}

/// Category detail route.
pub fn category_href(slug: &str) -> String {
    format!("/category/{}", slug)
}

/// Product detail route.
pub fn product_href(slug: &str) -> String {
    format!("/products/{}", slug)
}

/// Stable key for list rendering: id, then slug, then position.
fn card_key(id: Option<&str>, slug: Option<&str>, index: usize) -> String {
    id.filter(|s| !s.is_empty())
        .or(slug.filter(|s| !s.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("item-{}", index))
}

/// Everything needed to draw a category card.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub key: String,
    pub href: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub product_count: u64,
    pub is_premium: bool,
    pub entrance: Stagger,
}

/// Presents categories against an asset host.
#[derive(Debug, Clone)]
pub struct CategoryPresenter {
    assets: AssetResolver,
}

impl CategoryPresenter {
    pub fn new(assets: AssetResolver) -> Self {
        Self { assets }
    }
}

impl Presenter for CategoryPresenter {
    type Item = Category;
    type Card = CategoryCard;

    fn present(&self, category: &Category, index: usize) -> CategoryCard {
        CategoryCard {
            key: card_key(Some(category.id.as_str()), Some(category.slug.as_str()), index),
            href: category_href(&category.slug),
            name: category.name.clone(),
            description: category
                .description()
                .unwrap_or(DEFAULT_CATEGORY_DESCRIPTION)
                .to_string(),
            image_url: self
                .assets
                .resolve(category.image.as_deref(), CATEGORY_PLACEHOLDER),
            product_count: category.product_count(),
            is_premium: category.is_premium(),
            entrance: Stagger::new(index, CATEGORY_STAGGER),
        }
    }
}

/// Everything needed to draw a product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub key: String,
    pub href: String,
    pub name: String,
    pub image_url: String,
    /// Filled state of the five rating stars.
    pub rating_stars: [bool; 5],
    pub review_count: u64,
    pub price: String,
    /// Struck-through price, only during an active sale.
    pub regular_price: Option<String>,
    /// e.g. "20% OFF", only during an active sale.
    pub discount_label: Option<String>,
    pub on_sale: bool,
    pub entrance: Stagger,
}

impl ProductCard {
    /// Number of filled stars.
    pub fn filled_stars(&self) -> usize {
        self.rating_stars.iter().filter(|s| **s).count()
    }
}

/// Presents products against an asset host, in one currency.
#[derive(Debug, Clone)]
pub struct ProductPresenter {
    assets: AssetResolver,
    currency: Currency,
}

impl ProductPresenter {
    pub fn new(assets: AssetResolver, currency: Currency) -> Self {
        Self { assets, currency }
    }
}

impl Presenter for ProductPresenter {
    type Item = Product;
    type Card = ProductCard;

    fn present(&self, product: &Product, index: usize) -> ProductCard {
        let filled = product.rating().round() as usize;
        let on_sale = product.sale_active();

        ProductCard {
            key: card_key(product.id.as_deref(), product.slug.as_deref(), index),
            href: product_href(product.slug()),
            name: product.name().to_string(),
            image_url: self
                .assets
                .resolve(product.image.as_deref(), PRODUCT_PLACEHOLDER),
            rating_stars: std::array::from_fn(|i| i < filled),
            review_count: product.review_count(),
            price: product.price(self.currency).display_compact(),
            regular_price: on_sale
                .then(|| product.regular_price(self.currency).display_compact()),
            discount_label: on_sale
                .then(|| product.discount_percentage())
                .flatten()
                .map(|p| format!("{}% OFF", p)),
            on_sale,
            entrance: Stagger::new(index, PRODUCT_STAGGER),
        }
    }
}
