//! Site navigation: category menu, account menu, search and cart badge.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use storefront_catalog::{Category, Presenter};
use storefront_core::{Dropdown, ListingSpec, NavState, StoreConfig, StoreContext};

use super::async_view::async_view;
use super::skeleton;
use crate::hooks::use_collection;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::new());
    let session = expect_context::<StoreContext>();
    let presenter = expect_context::<StoreConfig>().category_presenter();

    let ListingSpec { query, options } = ListingSpec::nav_categories();
    let categories = use_collection::<Category>(move || query.clone());

    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        nav.update(NavState::route_changed);
    });

    let navigate = use_navigate();
    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(route) = nav.try_update(NavState::submit_search).flatten() {
            navigate(&route, Default::default());
        }
    };

    let is_open = move |menu: Dropdown| nav.with(|n| n.is_open(menu));
    let badge = session.cart_badge();

    view! {
        <header class="navbar">
            <div
                class="backdrop"
                class:hidden=move || nav.with(|n| !n.dropdown.is_open() && !n.search_expanded)
                on:click=move |_| nav.update(NavState::click_outside)
            ></div>

            <a href="/" class="brand">"STOREFRONT"</a>

            <nav class="links" style="display: flex; gap: 1rem; position: relative; z-index: 20;">
                <a href="/">"Home"</a>
                <div
                    class="nav-item"
                    on:mouseenter=move |_| nav.update(|n| n.hover(Dropdown::Products))
                    on:mouseleave=move |_| nav.update(|n| n.leave(false))
                >
                    <button
                        aria-expanded=move || is_open(Dropdown::Products).to_string()
                        on:click=move |_| nav.update(|n| n.toggle(Dropdown::Products))
                    >
                        "Products"
                    </button>
                    <div class="dropdown" class:hidden=move || !is_open(Dropdown::Products)>
                        {async_view(categories, options, skeleton::link_skeleton, move |items| {
                            presenter
                                .present_all(&items)
                                .into_iter()
                                .map(|card| view! { <a href=card.href style="display: block;">{card.name}</a> })
                                .collect::<Vec<_>>()
                        })}
                        <a href="/products" style="display: block; font-weight: 600;">"All Products"</a>
                    </div>
                </div>
                <a href="/categories">"Categories"</a>
            </nav>

            <div class="actions" style="margin-left: auto; display: flex; gap: 1rem; position: relative; z-index: 20;">
                <form
                    role="search"
                    class:hidden=move || !nav.with(|n| n.search_expanded)
                    on:submit=on_search
                >
                    <input
                        type="search"
                        placeholder="Search products..."
                        prop:value=move || nav.with(|n| n.search_query.clone())
                        on:input=move |ev| nav.update(|n| n.set_query(event_target_value(&ev)))
                    />
                    <button
                        type="button"
                        aria-label="Clear search"
                        class:hidden=move || !nav.with(NavState::has_query)
                        on:click=move |_| nav.update(NavState::clear_query)
                    >
                        "✕"
                    </button>
                    <button type="submit">"Search"</button>
                </form>
                <button
                    aria-label="Search"
                    class:hidden=move || nav.with(|n| n.search_expanded)
                    on:click=move |_| nav.update(NavState::expand_search)
                >
                    "Search"
                </button>

                <div
                    class="nav-item"
                    on:mouseenter=move |_| nav.update(|n| n.hover(Dropdown::Account))
                    on:mouseleave=move |_| nav.update(|n| n.leave(false))
                >
                    <button on:click=move |_| nav.update(|n| n.toggle(Dropdown::Account))>
                        "Account"
                    </button>
                    <div class="dropdown" class:hidden=move || !is_open(Dropdown::Account)>
                        {match session.customer.clone() {
                            Some(customer) => view! {
                                <p>"Hi, " {customer.name}</p>
                                <a href="/account" style="display: block;">"My Account"</a>
                                <a href="/account/orders" style="display: block;">"My Orders"</a>
                            }
                            .into_any(),
                            None => view! {
                                <a href="/login" style="display: block;">"Sign In"</a>
                                <a href="/register" style="display: block;">"Create Account"</a>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>

                <a href="/cart" aria-label="Cart">
                    "Cart"
                    {badge.map(|count| view! { <span class="badge">{count}</span> })}
                </a>

                <button
                    class="mobile-toggle"
                    aria-label="Menu"
                    on:click=move |_| {
                        nav.update(|n| {
                            if n.mobile_menu_open {
                                n.close_mobile_menu()
                            } else {
                                n.open_mobile_menu()
                            }
                        })
                    }
                >
                    "☰"
                </button>
            </div>

            <div class="mobile-menu" class:hidden=move || !nav.with(|n| n.mobile_menu_open)>
                <a href="/" style="display: block;">"Home"</a>
                <a href="/products" style="display: block;">"Products"</a>
                <a href="/categories" style="display: block;">"Categories"</a>
            </div>
        </header>
    }
}
