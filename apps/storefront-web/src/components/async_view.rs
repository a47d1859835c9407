//! The shared four-way renderer for fetched listings.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use storefront_core::{RenderMode, ViewOptions};

use crate::hooks::Collection;

/// Render `collection` as a skeleton grid, an error panel with retry, an
/// empty fallback, or the populated view built by `populated`.
pub fn async_view<T, F, V>(
    collection: Collection<T>,
    options: ViewOptions,
    skeleton: fn() -> AnyView,
    populated: F,
) -> impl IntoView
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn(Vec<T>) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let mode = collection.mode(&options);
        let state = mode.name();
        let body = match mode {
            RenderMode::Loading { placeholders } => view! {
                <div class="grid" aria-busy="true">
                    {(0..placeholders).map(|_| skeleton()).collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
            RenderMode::Error { reason } => view! {
                <div class="async-error">
                    <p style="color: red;">{reason}</p>
                    <button class="btn" on:click=move |_| collection.reload()>
                        "Try Again"
                    </button>
                </div>
            }
            .into_any(),
            RenderMode::Empty { fallback } => view! {
                <div class="empty-state">
                    <h3>{fallback.title}</h3>
                    <p>{fallback.message}</p>
                    <a href=fallback.href class="btn">{fallback.link_label}</a>
                </div>
            }
            .into_any(),
            RenderMode::Populated { .. } => populated(collection.items()).into_any(),
        };
        view! { <div class="async-view" data-state=state>{body}</div> }
    }
}
