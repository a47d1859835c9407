//! Home page sections.

use leptos::prelude::*;
use storefront_catalog::{Category, Product};
use storefront_core::{ListingSpec, StoreConfig};

use super::async_view::async_view;
use super::cards::{category_grid, product_grid};
use super::hero::HeroCarousel;
use super::skeleton;
use crate::hooks::use_collection;

// ============================================================================
// Page
// ============================================================================

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroCarousel/>
        <FeaturedCategories/>
        <FeaturedProducts/>
    }
}

// ============================================================================
// Sections
// ============================================================================

#[component]
pub fn FeaturedCategories() -> impl IntoView {
    let ListingSpec { query, options } = ListingSpec::featured_categories();
    let presenter = expect_context::<StoreConfig>().category_presenter();
    let categories = use_collection::<Category>(move || query.clone());

    view! {
        <section class="featured-categories">
            <h2>"Shop by Category"</h2>
            {async_view(categories, options, skeleton::category_skeleton, move |items| {
                category_grid(&presenter, &items)
            })}
            <a href="/categories">"View All Categories"</a>
        </section>
    }
}

#[component]
pub fn FeaturedProducts() -> impl IntoView {
    let ListingSpec { query, options } = ListingSpec::featured_products();
    let presenter = expect_context::<StoreConfig>().product_presenter();
    let products = use_collection::<Product>(move || query.clone());

    view! {
        <section class="featured-products">
            <h2>"Featured Products"</h2>
            {async_view(products, options, skeleton::product_skeleton, move |items| {
                product_grid(&presenter, &items)
            })}
        </section>
    }
}
