//! Listing pages.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use storefront_catalog::{Category, Product};
use storefront_core::{ListingSpec, StoreConfig, ViewOptions};

use super::async_view::async_view;
use super::cards::{category_grid, product_grid};
use super::skeleton;
use crate::hooks::use_collection;

// ============================================================================
// Listing Pages
// ============================================================================

/// `/categories`
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ListingSpec { query, options } = ListingSpec::categories_page();
    let presenter = expect_context::<StoreConfig>().category_presenter();
    let categories = use_collection::<Category>(move || query.clone());

    view! {
        <h1>"All Categories"</h1>
        <p style="color: #666;">"Explore our premium supplement ranges"</p>
        {async_view(categories, options, skeleton::category_skeleton, move |items| {
            category_grid(&presenter, &items)
        })}
    }
}

/// `/products`, honouring `?search=`.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let query_map = use_query_map();
    let search = move || {
        query_map
            .with(|q| q.get("search"))
            .filter(|term| !term.trim().is_empty())
    };
    let presenter = expect_context::<StoreConfig>().product_presenter();
    let products = use_collection::<Product>(move || {
        ListingSpec::product_listing(search().as_deref(), None).query
    });

    view! {
        <h1>
            {move || match search() {
                Some(term) => format!("Results for \"{}\"", term.trim()),
                None => "All Products".to_string(),
            }}
        </h1>
        {async_view(products, ViewOptions::product_listing(), skeleton::product_skeleton, move |items| {
            product_grid(&presenter, &items)
        })}
    }
}

/// `/category/:slug`, the product listing for one category.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug")).unwrap_or_default();
    let presenter = expect_context::<StoreConfig>().product_presenter();
    let products = use_collection::<Product>(move || {
        ListingSpec::product_listing(None, Some(&slug())).query
    });

    view! {
        <h1>{move || title_from_slug(&slug())}</h1>
        {async_view(products, ViewOptions::product_listing(), skeleton::product_skeleton, move |items| {
            product_grid(&presenter, &items)
        })}
    }
}

// ============================================================================
// Fallback
// ============================================================================

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// `"whey-protein"` -> `"Whey Protein"`.
fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("whey-protein"), "Whey Protein");
        assert_eq!(title_from_slug("pre_workout--x"), "Pre Workout X");
        assert_eq!(title_from_slug(""), "");
    }
}
