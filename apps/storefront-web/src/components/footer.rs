//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer style="border-top: 1px solid #eee; padding: 2rem 1rem; text-align: center;">
            <nav style="display: flex; gap: 1.5rem; justify-content: center; margin-bottom: 1rem;">
                <a href="/">"Home"</a>
                <a href="/products">"Products"</a>
                <a href="/categories">"Categories"</a>
            </nav>
            <p style="font-size: 0.8rem; color: #888;">"Premium supplements, delivered."</p>
        </footer>
    }
}
