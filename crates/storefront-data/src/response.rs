//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response as seen by the fetcher.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A 200 response carrying a JSON body.
    pub fn json_ok(body: impl Into<Vec<u8>>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self::new(200, headers, body.into())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Get the raw response body.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The API reports failures as `{ "success": false, "message": "..." }`;
    /// that message is preferred over the raw body.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }

        let message = self
            .json::<serde_json::Value>()
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .or_else(|| self.text().ok())
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", self.status));

        Err(FetchError::Http {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    // === Status Check Tests ===

    #[test]
    fn test_response_status_classes() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(300, b"").is_success());
    }

    // === Body Tests ===

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(matches!(resp.text(), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_response_json() {
        let resp = Response::json_ok(r#"{"value": 42}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["value"], 42);
    }

    // === error_for_status Tests ===

    #[test]
    fn test_error_for_status_success() {
        assert!(make_response(200, b"OK").error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_prefers_api_message() {
        let resp = make_response(404, br#"{"success":false,"message":"No such listing"}"#);
        let err = resp.error_for_status().unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 404,
                message: "No such listing".to_string()
            }
        );
    }

    #[test]
    fn test_error_for_status_uses_plain_body() {
        let err = make_response(502, b"Bad Gateway").error_for_status().unwrap_err();
        assert_eq!(err.reason(), "Bad Gateway");
    }

    #[test]
    fn test_error_for_status_empty_body() {
        let err = make_response(500, b"").error_for_status().unwrap_err();
        assert_eq!(err.reason(), "HTTP 500");
    }
}
