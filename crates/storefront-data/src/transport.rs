//! Transport abstraction.
//!
//! The fetcher only needs "GET this URL, give me a response". Browsers and
//! native hosts both go through [`HttpTransport`]; tests and demos use
//! [`StaticTransport`].

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::{FetchError, Response};

/// Performs a single GET request.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait Transport {
    /// Fetch `url` and return the raw response, whatever its status.
    async fn get(&self, url: &str) -> Result<Response, FetchError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        (**self).get(url).await
    }
}

/// `reqwest`-backed transport. Uses the browser's `fetch` on wasm32.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let url = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// Canned responses keyed by full URL.
///
/// Unknown URLs fail with a connection error. Every requested URL is
/// recorded so callers can assert on what was fetched.
#[derive(Debug, Default)]
pub struct StaticTransport {
    routes: HashMap<String, Result<Response, FetchError>>,
    requests: RefCell<Vec<String>>,
}

impl StaticTransport {
    /// Create a transport with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a 200 JSON body.
    pub fn with_json(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes
            .insert(url.into(), Ok(Response::json_ok(body.into().into_bytes())));
        self
    }

    /// Answer `url` with an arbitrary status and body.
    pub fn with_status(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            url.into(),
            Ok(Response::new(status, HashMap::new(), body.into().into_bytes())),
        );
        self
    }

    /// Fail `url` with the given error.
    pub fn with_error(mut self, url: impl Into<String>, error: FetchError) -> Self {
        self.routes.insert(url.into(), Err(error));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for StaticTransport {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(result) => result.clone(),
            None => Err(FetchError::Connection(format!("no route for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_static_transport_serves_routes() {
        let transport = StaticTransport::new().with_json("https://api.test/a", "{}");
        let resp = block_on(transport.get("https://api.test/a")).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.bytes(), b"{}");
    }

    #[test]
    fn test_static_transport_unknown_route() {
        let transport = StaticTransport::new();
        let err = block_on(transport.get("https://api.test/missing")).unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)));
        assert_eq!(transport.requests(), vec!["https://api.test/missing"]);
    }

    #[test]
    fn test_http_transport_rejects_bad_url() {
        let transport = HttpTransport::new();
        let err = block_on(transport.get("not a url")).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
