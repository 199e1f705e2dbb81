//! Backend Bindings
//!
//! HTTP wrappers for the hosted auth and REST data endpoints, organized by
//! domain.

mod auth;
mod products;
mod users;

use serde::Deserialize;
use thiserror::Error;

use crate::config;

// Re-export all public items
pub use auth::*;
pub use products::*;
pub use users::*;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { code: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

pub(crate) fn rest_url(table: &str) -> String {
    format!("{}/rest/v1/{table}", config::BACKEND_URL)
}

pub(crate) fn auth_url(path: &str) -> String {
    format!("{}/auth/v1/{path}", config::BACKEND_URL)
}

/// Bearer value for data requests; falls back to the anon key when no
/// session token is available.
pub(crate) fn bearer(access_token: Option<&str>) -> String {
    format!("Bearer {}", access_token.unwrap_or(config::BACKEND_ANON_KEY))
}

/// Turn a non-2xx response into an `ApiError::Status` carrying the backend's
/// message when one can be extracted.
pub(crate) async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = extract_error_message(&body).unwrap_or_else(|| {
        if body.is_empty() {
            status.to_string()
        } else {
            body
        }
    });
    Err(ApiError::Status { code: status.as_u16(), message })
}

/// The auth and REST surfaces disagree on the error body field name.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error_description: Option<String>,
        msg: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.or(parsed.error_description).or(parsed.msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_variants() {
        assert_eq!(
            extract_error_message(r#"{"message":"row not found"}"#).as_deref(),
            Some("row not found")
        );
        assert_eq!(
            extract_error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
                .as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(
            extract_error_message(r#"{"msg":"Invalid login credentials"}"#).as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(extract_error_message("not json"), None);
        assert_eq!(extract_error_message(r#"{"code":400}"#), None);
    }

    #[test]
    fn test_bearer_falls_back_to_anon_key() {
        assert_eq!(bearer(Some("tok")), "Bearer tok");
        assert_eq!(bearer(None), format!("Bearer {}", config::BACKEND_ANON_KEY));
    }
}
