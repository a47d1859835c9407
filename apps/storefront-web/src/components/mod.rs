//! Page and layout components.

mod async_view;
mod cards;
mod footer;
mod hero;
mod home;
mod navbar;
mod pages;
mod skeleton;

pub use async_view::async_view;
pub use cards::{CategoryTile, ProductTile};
pub use footer::Footer;
pub use hero::HeroCarousel;
pub use home::{FeaturedCategories, FeaturedProducts, HomePage};
pub use navbar::Navbar;
pub use pages::{CategoriesPage, CategoryPage, NotFound, ProductsPage};
