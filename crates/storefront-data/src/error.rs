//! Fetch error types.

use thiserror::Error;

/// Reason used when a failure carries no usable text.
pub const FALLBACK_REASON: &str = "Failed to load";

/// Errors that can occur while fetching a collection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Connection(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Human-readable reason suitable for display in a view.
    ///
    /// HTTP failures surface the server's message verbatim; everything else
    /// uses the full error text.
    pub fn reason(&self) -> String {
        let reason = match self {
            FetchError::Http { message, .. } => message.trim().to_string(),
            other => other.to_string(),
        };
        if reason.is_empty() {
            FALLBACK_REASON.to_string()
        } else {
            reason
        }
    }

    /// Transport-level failure or non-success response.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Connection(_) | FetchError::Http { .. })
    }

    /// HTTP status, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Connection(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_reason_is_server_message() {
        let err = FetchError::Http {
            status: 404,
            message: "Category not found".to_string(),
        };
        assert_eq!(err.reason(), "Category not found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_network());
    }

    #[test]
    fn test_blank_http_message_falls_back() {
        let err = FetchError::Http {
            status: 500,
            message: "   ".to_string(),
        };
        assert_eq!(err.reason(), FALLBACK_REASON);
    }

    #[test]
    fn test_connection_reason_keeps_context() {
        let err = FetchError::Connection("connection refused".to_string());
        assert_eq!(err.reason(), "Request failed: connection refused");
        assert!(err.is_network());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_parse_is_not_network() {
        let err = FetchError::Parse("expected value".to_string());
        assert!(!err.is_network());
    }
}
