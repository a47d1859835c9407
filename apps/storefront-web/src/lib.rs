//! Client-rendered storefront.
//!
//! Every listing on the site goes through one fetch cycle and one renderer:
//! [`hooks::use_collection`] drives the fetch, [`components::async_view`]
//! picks skeleton, error, empty or populated output. Store configuration
//! and the session snapshot are provided as context at the root.

pub mod components;
pub mod console;
pub mod hooks;
pub mod settings;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use storefront_core::{telemetry, StoreContext};

use components::{CategoriesPage, CategoryPage, Footer, HomePage, Navbar, NotFound, ProductsPage};
use console::ConsoleWriter;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(settings::store_config());
    provide_context(StoreContext::guest());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Premium supplements, delivered."/>
        <Title text="Storefront"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/categories") view=CategoriesPage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/category/:slug") view=CategoryPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Browser entry point.
pub fn start() {
    console_error_panic_hook::set_once();
    telemetry::init_with_writer(None, ConsoleWriter);
    tracing::info!("storefront starting");
    leptos::mount::mount_to_body(App);
}
