//! Configuration types for the Tagwalk API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Tagwalk.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: The main configuration struct holding all SDK settings
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`BaseUrl`]: A validated API base URL newtype
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use tagwalk_api::{ApiConfig, AccessToken, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.tag-walk.com").unwrap())
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;
use crate::models::Language;

/// Configuration for the Tagwalk API SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// the API base URL, the access token, and the preferred content language.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use tagwalk_api::{ApiConfig, BaseUrl};
/// use tagwalk_api::models::Language;
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://api.tag-walk.com").unwrap())
///     .locale(Language::French)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.locale(), Language::French);
/// ```
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: BaseUrl,
    access_token: Option<AccessToken>,
    locale: Language,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tagwalk_api::{ApiConfig, BaseUrl};
    ///
    /// let config = ApiConfig::builder()
    ///     .base_url(BaseUrl::new("https://api.tag-walk.com").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the preferred content language.
    #[must_use]
    pub const fn locale(&self) -> Language {
        self.locale
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `base_url`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `access_token`: `None` (anonymous access)
/// - `locale`: [`Language::English`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (reqwest default)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tagwalk_api::{ApiConfig, AccessToken, BaseUrl};
/// use tagwalk_api::models::Language;
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://api.tag-walk.com").unwrap())
///     .access_token(AccessToken::new("my-token").unwrap())
///     .locale(Language::Italian)
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    access_token: Option<AccessToken>,
    locale: Option<Language>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the access token used for authenticated requests.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the preferred content language sent as `Accept-Language`.
    #[must_use]
    pub const fn locale(mut self, locale: Language) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ApiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(ApiConfig {
            base_url,
            access_token: self.access_token,
            locale: self.locale.unwrap_or(Language::English),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
