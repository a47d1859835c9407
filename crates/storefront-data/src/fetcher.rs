//! Collection fetcher.

use serde::de::DeserializeOwned;

use crate::envelope::extract_collection;
use crate::{CollectionQuery, FetchError, Transport};

/// Fetches listings from the storefront API.
///
/// One network call per [`fetch`](Fetcher::fetch), no retries, no timeout.
/// The fetcher never touches view state; callers sequence the resource
/// transitions around the call.
#[derive(Debug, Clone)]
pub struct Fetcher<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> Fetcher<T> {
    /// Create a fetcher against `base_url` (e.g. `https://api.example.com/api`).
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL for a query.
    pub fn url_for(&self, query: &CollectionQuery) -> String {
        join_url(&self.base_url, &query.path_and_query())
    }

    /// Fetch one listing and unwrap its envelope.
    pub async fn fetch<Item: DeserializeOwned>(
        &self,
        query: &CollectionQuery,
    ) -> Result<Vec<Item>, FetchError> {
        let url = self.url_for(query);
        tracing::debug!(%url, field = query.field(), "fetching collection");

        let result = async {
            let response = self.transport.get(&url).await?.error_for_status()?;
            extract_collection(response.bytes(), query.field())
        }
        .await;

        match &result {
            Ok(items) => tracing::debug!(%url, count = items.len(), "collection loaded"),
            Err(e) if e.is_network() => {
                tracing::warn!(%url, status = ?e.status(), error = %e, "collection fetch failed")
            }
            Err(e) => tracing::error!(%url, error = %e, "collection payload rejected"),
        }
        result
    }
}

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticTransport;
    use futures::executor::block_on;
    use serde::Deserialize;

    const BASE: &str = "https://api.test/api";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    fn fetcher(transport: StaticTransport) -> Fetcher<StaticTransport> {
        Fetcher::new(transport, BASE)
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.test/", "/x"), "https://a.test/x");
        assert_eq!(join_url("https://a.test", "x"), "https://a.test/x");
        assert_eq!(join_url("", "/x"), "/x");
    }

    #[test]
    fn test_fetch_unwraps_envelope() {
        let transport = StaticTransport::new().with_json(
            "https://api.test/api/public/categories",
            r#"{"data":{"categories":[{"name":"Protein"}]}}"#,
        );
        let items: Vec<Named> = block_on(fetcher(transport).fetch(&CollectionQuery::categories())).unwrap();
        assert_eq!(items, vec![Named { name: "Protein".into() }]);
    }

    #[test]
    fn test_fetch_builds_query_url() {
        let f = fetcher(StaticTransport::new().with_json(
            "https://api.test/api/public/products?featured=true&limit=8",
            r#"{"data":{}}"#,
        ));
        let query = CollectionQuery::products().featured(true).limit(8);
        let items: Vec<Named> = block_on(f.fetch(&query)).unwrap();
        assert!(items.is_empty());
        assert_eq!(
            f.transport().requests(),
            vec!["https://api.test/api/public/products?featured=true&limit=8"]
        );
    }

    #[test]
    fn test_fetch_surfaces_http_failure() {
        let transport = StaticTransport::new().with_status(
            "https://api.test/api/public/categories",
            503,
            r#"{"message":"Service unavailable"}"#,
        );
        let err = block_on(fetcher(transport).fetch::<Named>(&CollectionQuery::categories())).unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.reason(), "Service unavailable");
    }

    #[test]
    fn test_fetch_surfaces_transport_failure() {
        let transport = StaticTransport::new().with_error(
            "https://api.test/api/public/categories",
            FetchError::Connection("network down".into()),
        );
        let err = block_on(fetcher(transport).fetch::<Named>(&CollectionQuery::categories())).unwrap_err();
        assert_eq!(err, FetchError::Connection("network down".into()));
    }
}
