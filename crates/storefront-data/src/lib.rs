//! Collection fetcher and HTTP transport for the storefront.
//!
//! Listings come back wrapped in an envelope; this crate knows how to ask for
//! them and how to unwrap them, and nothing else.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{CollectionQuery, Fetcher, HttpTransport};
//!
//! let fetcher = Fetcher::new(HttpTransport::new(), "https://api.example.com/api");
//!
//! // GET /public/products?featured=true&limit=8 -> data.products
//! let query = CollectionQuery::products().featured(true).limit(8);
//! let products: Vec<Product> = fetcher.fetch(&query).await?;
//! ```

mod envelope;
mod error;
mod fetcher;
mod request;
mod response;
mod transport;

pub use envelope::extract_collection;
pub use error::{FetchError, FALLBACK_REASON};
pub use fetcher::{join_url, Fetcher};
pub use request::{CollectionQuery, CATEGORIES_PATH, PRODUCTS_PATH};
pub use response::Response;
pub use transport::{HttpTransport, StaticTransport, Transport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CollectionQuery, FetchError, Fetcher, HttpTransport, Response, Transport};
}
