//! Async view state for the storefront.
//!
//! Every listing on the site (category grids, product carousels, search
//! results) runs the same cycle: mark the view as loading, fetch a
//! collection, settle into success or failure, and pick one of four render
//! modes. This crate owns that cycle plus the small pieces of UI state that
//! sit around it (navbar menus, hero carousel) and the store configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//!
//! let config = StoreConfig::default();
//! let fetcher = config.fetcher(HttpTransport::new());
//! let listing = ListingSpec::featured_products();
//!
//! let slot = ResourceSlot::<Product>::new();
//! load(&slot.cell(), &fetcher, &listing.query).await;
//!
//! match slot.render_mode(&listing.options) {
//!     RenderMode::Populated { count } => { /* cards */ }
//!     other => { /* skeletons, error or empty fallback */ }
//! }
//! ```

pub mod carousel;
pub mod config;
pub mod loader;
pub mod nav;
pub mod render;
pub mod resource;
pub mod session;
pub mod telemetry;
pub mod views;

pub use carousel::{Carousel, Slide, AUTOPLAY_INTERVAL, HERO_SLIDES};
pub use config::StoreConfig;
pub use loader::{load, LoadOutcome, ResourceCell, ResourceSlot};
pub use nav::{search_route, Dropdown, NavState};
pub use render::{select, EmptyFallback, RenderMode, ViewOptions};
pub use resource::{AsyncResource, FetchTicket, ResourceStatus};
pub use session::{CartLine, CartSummary, Customer, StoreContext};
pub use views::{ListingSpec, FEATURED_PRODUCT_LIMIT};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        load, select, AsyncResource, ListingSpec, LoadOutcome, RenderMode, ResourceCell,
        ResourceSlot, ResourceStatus, StoreConfig, StoreContext, ViewOptions,
    };
    pub use storefront_catalog::prelude::*;
    pub use storefront_data::prelude::*;
}
