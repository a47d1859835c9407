//! Listing cards.

use leptos::prelude::*;
use storefront_catalog::{
    Category, CategoryCard, CategoryPresenter, Presenter, Product, ProductCard, ProductPresenter,
};

// ============================================================================
// Grids
// ============================================================================

pub fn category_grid(presenter: &CategoryPresenter, items: &[Category]) -> impl IntoView {
    view! {
        <div class="grid">
            {presenter
                .present_all(items)
                .into_iter()
                .map(|card| view! { <CategoryTile card=card/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

pub fn product_grid(presenter: &ProductPresenter, items: &[Product]) -> impl IntoView {
    view! {
        <div class="grid">
            {presenter
                .present_all(items)
                .into_iter()
                .map(|card| view! { <ProductTile card=card/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

// ============================================================================
// Cards
// ============================================================================

#[component]
pub fn CategoryTile(card: CategoryCard) -> impl IntoView {
    let style = format!("animation-delay: {}", card.entrance.css_delay());
    let count = match card.product_count {
        1 => "1 product".to_string(),
        n => format!("{} products", n),
    };

    view! {
        <a href=card.href class="card category-card" style=style>
            <img src=card.image_url alt=card.name.clone() loading="lazy"/>
            <div class="info">
                {card.is_premium.then(|| view! { <span class="badge">"PREMIUM"</span> })}
                <h3>{card.name}</h3>
                <p>{card.description}</p>
                <p style="font-size: 0.8rem; color: #666;">{count}</p>
            </div>
        </a>
    }
}

#[component]
pub fn ProductTile(card: ProductCard) -> impl IntoView {
    let style = format!("animation-delay: {}", card.entrance.css_delay());
    let wishlist_key = card.key.clone();
    let cart_key = card.key.clone();

    view! {
        <div class="card product-card" style=style>
            <a href=card.href.clone()>
                <img src=card.image_url alt=card.name.clone() loading="lazy"/>
            </a>
            {card.discount_label.map(|label| view! { <span class="badge">{label}</span> })}
            <button
                class="wishlist"
                aria-label="Add to wishlist"
                on:click=move |_| tracing::info!(product = %wishlist_key, "wishlist requested")
            >
                "♡"
            </button>
            <div class="info">
                <a href=card.href><h3>{card.name}</h3></a>
                <div class="rating">
                    {card
                        .rating_stars
                        .into_iter()
                        .map(|filled| view! { <span class="star" class:filled=filled>"★"</span> })
                        .collect::<Vec<_>>()}
                    <span style="font-size: 0.8rem; color: #666;">
                        "(" {card.review_count.to_string()} ")"
                    </span>
                </div>
                <p>
                    <span class="price">{card.price}</span>
                    {card.regular_price.map(|p| view! { <span class="regular-price">{p}</span> })}
                </p>
                <button
                    class="btn"
                    on:click=move |_| tracing::info!(product = %cart_key, "add to cart requested")
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
