//! Loading placeholders, one per grid cell.

use leptos::prelude::*;

pub fn category_skeleton() -> AnyView {
    view! {
        <div class="card">
            <div class="skeleton" style="width: 100%; height: 200px;"></div>
            <div class="info">
                <div class="skeleton" style="width: 60%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 90%; height: 1rem;"></div>
            </div>
        </div>
    }
    .into_any()
}

pub fn product_skeleton() -> AnyView {
    view! {
        <div class="card">
            <div class="skeleton" style="width: 100%; height: 200px;"></div>
            <div class="info">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 50%; height: 1rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
    .into_any()
}

/// Single line, for menus.
pub fn link_skeleton() -> AnyView {
    view! { <div class="skeleton" style="width: 8rem; height: 1rem; margin: 0.4rem 0;"></div> }
        .into_any()
}
