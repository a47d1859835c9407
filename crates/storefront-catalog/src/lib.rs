//! Catalog models and card presenters for the storefront.
//!
//! - **Models**: [`Category`] and [`Product`] as the listing API sends them,
//!   with lenient decoding and documented zero values
//! - **Assets**: [`AssetResolver`] turns image keys into absolute URLs
//! - **Presenters**: pure `(item, index) -> card` mappings used by every grid
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let presenter = ProductPresenter::new(AssetResolver::new(asset_host), Currency::INR);
//! for card in presenter.present_all(&products) {
//!     println!("{} {} ({})", card.name, card.price, card.href);
//! }
//! ```

mod de;

pub mod asset;
pub mod category;
pub mod money;
pub mod presenter;
pub mod product;

pub use asset::{AssetResolver, CATEGORY_PLACEHOLDER, PRODUCT_PLACEHOLDER};
pub use category::{Category, CategoryCounts};
pub use money::{Currency, Money};
pub use presenter::{
    CategoryCard, CategoryPresenter, Presenter, ProductCard, ProductPresenter, Stagger,
};
pub use product::Product;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::asset::AssetResolver;
    pub use crate::money::{Currency, Money};
    pub use crate::presenter::{
        CategoryCard, CategoryPresenter, Presenter, ProductCard, ProductPresenter,
    };
    pub use crate::{Category, Product};
}
