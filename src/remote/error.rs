//! HTTP error classification for the item-bank API.

use std::fmt;

use crate::error::ExplorerError;

/// A non-success response from the data service.
///
/// Keeps the status around so callers can tell transient server failures
/// from requests the service rejected.
#[derive(Debug)]
pub struct ApiError {
    pub status: reqwest::StatusCode,
    pub url: String,
    /// Reason from the response body, if any
    pub message: String,
}

/// Longest body excerpt kept in an error message.
const MAX_MESSAGE_LEN: usize = 200;

impl ApiError {
    /// Build from a response body. A JSON `{"detail": "..."}` body yields just
    /// the detail text; anything else is kept as a trimmed excerpt.
    pub fn new(status: reqwest::StatusCode, url: impl Into<String>, body: &str) -> Self {
        let reason = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        let message: String = reason.chars().take(MAX_MESSAGE_LEN).collect();
        Self {
            status,
            url: url.into(),
            message,
        }
    }

    /// Server-side failures may succeed on a later trigger.
    pub fn is_transient(&self) -> bool {
        self.status.is_server_error() || self.status.as_u16() == 429
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} returned {}", self.url, self.status)
        } else {
            write!(f, "{} returned {}: {}", self.url, self.status, self.message)
        }
    }
}

impl From<ApiError> for ExplorerError {
    fn from(error: ApiError) -> Self {
        ExplorerError::Status {
            status: error.status,
            url: error.url,
            message: error.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_transient_classification() {
        let unavailable = ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "/api/items", "");
        assert!(unavailable.is_transient());

        let bad_request = ApiError::new(StatusCode::BAD_REQUEST, "/api/items", "bad area");
        assert!(!bad_request.is_transient());
        assert_eq!(bad_request.to_string(), "/api/items returned 400 Bad Request: bad area");
    }

    #[test]
    fn test_message_truncated() {
        let body = "x".repeat(1000);
        let error = ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "/api/items", &body);
        assert_eq!(error.message.len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_detail_field_is_extracted() {
        let body = r#"{"detail": "Invalid content_area; use s1..s6"}"#;
        let error = ApiError::new(StatusCode::BAD_REQUEST, "/api/items", body);
        assert_eq!(error.message, "Invalid content_area; use s1..s6");

        let error = ApiError::new(StatusCode::BAD_GATEWAY, "/api/items", r#"{"error": 1}"#);
        assert_eq!(error.message, r#"{"error": 1}"#);
    }

    #[test]
    fn test_converts_to_transport_error_with_reason() {
        let error: ExplorerError =
            ApiError::new(StatusCode::NOT_FOUND, "/api/items/9", r#"{"detail":"Item not found"}"#)
                .into();
        assert!(error.is_transport());
        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            error.to_string(),
            "request to /api/items/9 failed with status 404 Not Found: Item not found"
        );
    }
}
