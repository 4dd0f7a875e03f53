//! HTTP transport seam.
//!
//! API wrappers speak to the backend through the [`Transport`] trait so
//! the request/response shaping logic can be exercised against an
//! in-memory fake. [`HttpTransport`] is the real implementation: reqwest
//! with a request timeout, base-URL joining, and bearer-token injection
//! read from a [`TokenStore`](crate::TokenStore) on every request.
//! [`AuthInterceptor`] layers the 401 session-invalidation rule on top
//! of any transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use medmanager_types::MessageResponse;

use crate::error::{ApiError, ApiResult};
use crate::token::TokenStore;

/// Default per-request timeout, matching the original client configuration.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum length of an error body echoed into an error message.
const ERROR_BODY_LIMIT: usize = 200;

/// Errors raised below the HTTP status layer.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be completed (connect failure, timeout).
    #[error("network error: {message}")]
    Network {
        /// What went wrong.
        message: String,
    },

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL: {message}")]
    InvalidBaseUrl {
        /// What went wrong.
        message: String,
    },
}

/// A backend request, method plus path relative to the API base.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the API base, e.g. `/interactions/check`.
    pub path: String,
    /// Query string pairs.
    pub query: Vec<(String, String)>,
    /// JSON body, when the method carries one.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Builds a GET request.
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Builds a POST request.
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Builds a PUT request.
    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Builds a DELETE request.
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends a query pair.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attaches a JSON body.
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A backend response: status code plus raw body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the typed API wrappers and the wire.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes one request and returns the raw response.
    ///
    /// Only connection-level failures are errors here; non-success
    /// statuses come back as a [`RawResponse`] for the caller to map.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed [`Transport`].
///
/// Attaches `Authorization: Bearer <token>` when the token store holds an
/// unexpired session. The API wrappers themselves never touch the token.
/// Pair with [`AuthInterceptor`] (as [`ApiClient::new`] does) so a 401
/// response also clears the stored session.
///
/// [`ApiClient::new`]: crate::ApiClient::new
pub struct HttpTransport {
    http: reqwest::Client,
    base: Url,
    tokens: Arc<dyn TokenStore>,
}

impl HttpTransport {
    /// Creates a transport for the given API base URL.
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, tokens, DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a custom per-request timeout.
    pub fn with_timeout(
        base_url: &str,
        tokens: Arc<dyn TokenStore>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        // Ensure a trailing slash so Url::join keeps the base path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base = Url::parse(&normalized).map_err(|error| TransportError::InvalidBaseUrl {
            message: error.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| TransportError::Network {
                message: error.to_string(),
            })?;

        Ok(Self { http, base, tokens })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self
            .base
            .join(request.path.trim_start_matches('/'))
            .map_err(|error| TransportError::InvalidBaseUrl {
                message: error.to_string(),
            })?;

        tracing::debug!(method = %request.method, path = %request.path, "issuing API request");

        let mut builder = self.http.request(request.method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(user) = self.tokens.load() {
            builder = builder.bearer_auth(&user.token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| TransportError::Network {
                message: error.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|error| TransportError::Network {
                message: error.to_string(),
            })?
            .to_vec();

        Ok(RawResponse { status, body })
    }
}

/// [`Transport`] decorator enforcing the session-invalidation rule.
///
/// Wraps any transport and clears the token store whenever the backend
/// answers 401, before the response is surfaced. Sitting above the
/// transport seam, the rule holds for custom [`Transport`]
/// implementations too, not just [`HttpTransport`].
pub struct AuthInterceptor {
    inner: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
}

impl AuthInterceptor {
    /// Wraps a transport with the 401-clearing rule over the given store.
    pub fn new(inner: Arc<dyn Transport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { inner, tokens }
    }
}

#[async_trait]
impl Transport for AuthInterceptor {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let response = self.inner.execute(request).await?;
        if response.status == 401 {
            tracing::warn!("authentication rejected by backend, clearing stored session");
            self.tokens.clear();
        }
        Ok(response)
    }
}

/// Extracts a human-readable message from an error body.
///
/// Prefers the structured `{ "message": ... }` payload, falling back to a
/// truncated echo of the raw body.
fn error_message(body: &[u8]) -> Option<String> {
    if let Ok(payload) = serde_json::from_slice::<MessageResponse>(body) {
        return Some(payload.message);
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.chars().take(ERROR_BODY_LIMIT).collect())
    }
}

/// Executes a request and decodes a JSON response body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: ApiRequest,
) -> ApiResult<T> {
    let response = transport.execute(request).await?;
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            message: error_message(&response.body),
        });
    }
    serde_json::from_slice(&response.body).map_err(ApiError::Decode)
}

/// Executes a request, discarding any response body.
pub(crate) async fn send_unit(transport: &dyn Transport, request: ApiRequest) -> ApiResult<()> {
    let response = transport.execute(request).await?;
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            message: error_message(&response.body),
        });
    }
    Ok(())
}

/// Serializes a request body, mapping encode failures to [`ApiError`].
pub(crate) fn to_body<B: Serialize>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_structured_payload() {
        let body = br#"{"message": "drug not found"}"#;
        assert_eq!(error_message(body), Some("drug not found".to_string()));
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(
            error_message(b"Internal Server Error"),
            Some("Internal Server Error".to_string())
        );
        assert_eq!(error_message(b""), None);
        assert_eq!(error_message(b"   "), None);
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("/drugs")
            .query("search", "asp")
            .query("page", 2);
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query[1], ("page".to_string(), "2".to_string()));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse { status: 200, body: vec![] }.is_success());
        assert!(RawResponse { status: 204, body: vec![] }.is_success());
        assert!(!RawResponse { status: 301, body: vec![] }.is_success());
        assert!(!RawResponse { status: 500, body: vec![] }.is_success());
    }

    mod auth_interceptor {
        use super::*;
        use crate::testing::FakeTransport;
        use crate::token::MemoryTokenStore;
        use chrono::{Duration, Utc};
        use medmanager_types::AuthUser;

        fn signed_in_store() -> Arc<MemoryTokenStore> {
            let store = Arc::new(MemoryTokenStore::new());
            store
                .save(&AuthUser {
                    email: "user@example.org".to_string(),
                    first_name: "Linh".to_string(),
                    last_name: "Nguyen".to_string(),
                    roles: vec!["User".to_string()],
                    token: "jwt".to_string(),
                    expires_at: Utc::now() + Duration::hours(8),
                })
                .unwrap();
            store
        }

        fn interceptor(
            inner: &Arc<FakeTransport>,
            store: &Arc<MemoryTokenStore>,
        ) -> AuthInterceptor {
            AuthInterceptor::new(
                Arc::clone(inner) as Arc<dyn Transport>,
                Arc::clone(store) as Arc<dyn TokenStore>,
            )
        }

        #[tokio::test]
        async fn test_unauthorized_response_clears_stored_session() {
            let inner = Arc::new(FakeTransport::new());
            inner.push_json(401, serde_json::json!({"message": "token expired"}));
            let store = signed_in_store();

            let response = interceptor(&inner, &store)
                .execute(ApiRequest::get("/drugs"))
                .await
                .unwrap();

            assert_eq!(response.status, 401);
            assert!(store.load().is_none());
        }

        #[tokio::test]
        async fn test_other_responses_leave_session_untouched() {
            let inner = Arc::new(FakeTransport::new());
            inner.push_json(200, serde_json::json!({}));
            inner.push_json(500, serde_json::json!({"message": "boom"}));
            let store = signed_in_store();
            let transport = interceptor(&inner, &store);

            transport.execute(ApiRequest::get("/drugs")).await.unwrap();
            transport.execute(ApiRequest::get("/drugs")).await.unwrap();

            assert!(store.load().is_some());
        }

        #[tokio::test]
        async fn test_network_failure_does_not_clear_session() {
            let inner = Arc::new(FakeTransport::new());
            inner.push_network_error("connection refused");
            let store = signed_in_store();

            let error = interceptor(&inner, &store)
                .execute(ApiRequest::get("/drugs"))
                .await
                .unwrap_err();

            assert!(matches!(error, TransportError::Network { .. }));
            assert!(store.load().is_some());
        }
    }
}
