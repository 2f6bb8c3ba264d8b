//! Integration tests for the authentication user provider.
//!
//! Unlike the managers, every failure here must surface as a distinct
//! error: an authentication layer needs to tell "no such account" apart
//! from "the API is down".

use serde_json::json;
use tagwalk_api::models::User;
use tagwalk_api::{ApiConfig, ApiProvider, BaseUrl, ProviderError, UserProvider};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_provider(base_url: &str) -> UserProvider {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(base_url).unwrap())
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();
    UserProvider::new(ApiProvider::new(&config))
}

#[tokio::test]
async fn test_load_user_by_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/user%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "user@example.com",
            "firstname": "Jane",
            "lastname": "Doe",
            "roles": ["ROLE_USER"],
            "created_at": "2019-04-03T10:15:30+0000",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    let user = provider.load_user_by_email("user@example.com").await.unwrap();

    assert_eq!(user.username(), Some("user@example.com"));
    assert_eq!(user.full_name().as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn test_unknown_email_is_user_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    let result = provider.load_user_by_email("ghost@example.com").await;

    assert!(matches!(
        result,
        Err(ProviderError::UserNotFound { email }) if email == "ghost@example.com"
    ));
}

#[tokio::test]
async fn test_server_error_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = create_provider(&server.uri());
    let result = provider.load_user_by_email("user@example.com").await;

    assert!(matches!(
        result,
        Err(ProviderError::UnexpectedStatus { code: 503 })
    ));
}

#[tokio::test]
async fn test_unreachable_api_is_service_unavailable() {
    // Nothing listens on port 1
    let provider = create_provider("http://127.0.0.1:1");
    let result = provider.load_user_by_email("user@example.com").await;

    assert!(matches!(result, Err(ProviderError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn test_refresh_user_refetches_by_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/user%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "user@example.com",
            "roles": ["ROLE_USER", "ROLE_ADMIN"],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stale = User {
        email: Some("user@example.com".to_string()),
        roles: vec!["ROLE_USER".to_string()],
        ..User::default()
    };

    let provider = create_provider(&server.uri());
    let fresh = provider.refresh_user(&stale).await.unwrap();

    assert_eq!(fresh.roles, vec!["ROLE_USER", "ROLE_ADMIN"]);
}

#[tokio::test]
async fn test_refresh_user_without_email_is_unsupported() {
    let provider = create_provider("http://127.0.0.1:1");
    let result = provider.refresh_user(&User::default()).await;

    assert!(matches!(result, Err(ProviderError::Unsupported)));
}
