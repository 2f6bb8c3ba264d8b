//! Shared request-issuing component for the per-resource managers.
//!
//! This module provides the [`ApiProvider`] type, a convenience layer over
//! [`HttpClient`] exposing `get`, `post` and `patch` methods. Every manager
//! and the user provider issue their requests through it.

use std::collections::HashMap;

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ApiConfig;

/// Convenience client for issuing requests against the Tagwalk API.
///
/// Wraps an [`HttpClient`] and offers per-verb helpers so callers do not
/// build [`HttpRequest`] values by hand. Responses are returned for any
/// status code; the managers branch on [`HttpResponse::code`].
///
/// # Thread Safety
///
/// `ApiProvider` is `Clone`, `Send` and `Sync`; clone it freely into each
/// manager.
///
/// # Example
///
/// ```rust,ignore
/// use tagwalk_api::{ApiConfig, ApiProvider, BaseUrl};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://api.tag-walk.com").unwrap())
///     .build()
///     .unwrap();
///
/// let provider = ApiProvider::new(&config);
/// let response = provider.get("/api/tags", None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ApiProvider {
    http_client: HttpClient,
}

// Verify ApiProvider is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiProvider>();
};

impl ApiProvider {
    /// Creates a new provider for the given configuration.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The API path (e.g., "/api/tags")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PATCH request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Patch, path, Some(body), query)
            .await
    }

    /// Builds and sends the request through the HTTP client.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        tracing::debug!(%method, path, "issuing api request");

        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let request = builder.build()?;

        self.http_client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    #[test]
    fn test_provider_construction() {
        let config = ApiConfig::builder()
            .base_url(BaseUrl::new("https://api.tag-walk.com").unwrap())
            .build()
            .unwrap();
        let provider = ApiProvider::new(&config);

        assert_eq!(provider.http_client().base_uri(), "https://api.tag-walk.com");
    }

    #[test]
    fn test_provider_is_clone_send_sync() {
        fn assert_send_sync<T: Clone + Send + Sync>() {}
        assert_send_sync::<ApiProvider>();
    }
}
