//! # Tagwalk API Client
//!
//! A typed asynchronous client for the Tagwalk REST API: user and showroom
//! accounts, tags, individuals, and the media files attached to them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tagwalk_api::{ApiConfig, ApiProvider, BaseUrl, AccessToken};
//! use tagwalk_api::managers::ShowroomUserManager;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.tag-walk.com")?)
//!     .access_token(AccessToken::new("my-token")?)
//!     .build()?;
//!
//! let provider = ApiProvider::new(&config);
//! let manager = ShowroomUserManager::new(provider);
//!
//! match manager.get("buyer@example.com").await? {
//!     Some(user) => println!("found {}", user.full_name().unwrap_or_default()),
//!     None => println!("no such account"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **Fail-fast configuration**: [`BaseUrl`] and [`AccessToken`] validate at
//!   construction, so an `ApiProvider` never carries a malformed endpoint
//! - **Status codes are outcomes**: the HTTP layer returns a response for any
//!   status code; managers translate codes into `Ok(Some(_))`, `Ok(None)`,
//!   or a domain error instead of failing on non-2xx answers
//! - **One serialization pipeline**: every document flows through the
//!   [`Serializer`] registry, which converts ISO-8601 wire timestamps,
//!   prunes null attributes, and dispatches per document kind
//!
//! ## Modules
//!
//! - [`config`]: validated configuration and builder
//! - [`clients`]: HTTP request/response types, the transport client, and
//!   [`ApiProvider`]
//! - [`models`]: typed document records and shared constants
//! - [`serializer`]: the normalization pipeline
//! - [`managers`]: per-resource operations with status-code branching
//! - [`auth`]: the [`UserProvider`](auth::UserProvider) backing store for
//!   authentication layers

#![doc(html_root_url = "https://docs.rs/tagwalk-api/0.1.0")]

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod managers;
pub mod models;
pub mod serializer;

pub use auth::{ProviderError, UserProvider};
pub use clients::{
    ApiProvider, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, SDK_VERSION,
};
pub use config::{AccessToken, ApiConfig, ApiConfigBuilder, BaseUrl};
pub use error::ConfigError;
pub use managers::{IndividualManager, ManagerError, ShowroomUserManager, TagManager};
pub use serializer::{Document, DocumentKind, NormalizeContext, NormalizerError, Serializer};
