//! HTTP client types for Tagwalk API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the Tagwalk API. It handles request/response
//! processing and header handling.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`ApiProvider`]: The shared request-issuing component used by managers
//!
//! # Status Codes Are Not Errors
//!
//! The client returns responses for every status code; the per-resource
//! managers branch on it (200 deserialize, 404 absent, 403 access denied,
//! anything else logged). Only transport failures and invalid requests
//! become [`HttpError`] values.
//!
//! # Example
//!
//! ```rust,ignore
//! use tagwalk_api::{ApiConfig, BaseUrl};
//! use tagwalk_api::clients::{ApiProvider, HttpResponse};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.tag-walk.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let provider = ApiProvider::new(&config);
//! let response = provider.get("/api/users/user@example.com", None).await?;
//! if response.is_ok() {
//!     println!("User payload: {}", response.body);
//! }
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod provider;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use provider::ApiProvider;
