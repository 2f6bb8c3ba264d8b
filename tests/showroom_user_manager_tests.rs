//! Integration tests for the showroom user manager.
//!
//! These tests verify the full path from manager call to HTTP exchange:
//! URL construction with encoded emails, write-payload normalization, and
//! the status-code-to-outcome translation for every documented code.

use serde_json::json;
use tagwalk_api::managers::{ManagerError, ShowroomUserManager};
use tagwalk_api::models::ShowroomUser;
use tagwalk_api::{ApiConfig, ApiProvider, BaseUrl};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a manager pointed at the mock server.
fn create_manager(server: &MockServer) -> ShowroomUserManager {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(&server.uri()).unwrap())
        .build()
        .unwrap();
    ShowroomUserManager::new(ApiProvider::new(&config))
}

fn sample_user() -> ShowroomUser {
    ShowroomUser {
        email: Some("buyer@example.com".to_string()),
        firstname: Some("Jane".to_string()),
        lastname: Some("Doe".to_string()),
        company: Some("Maison Example".to_string()),
        address: Some("1 rue de la Paix, Paris".to_string()),
        country: Some("FR".to_string()),
        ..ShowroomUser::default()
    }
}

#[tokio::test]
async fn test_get_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/showroom/users/buyer%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "buyer@example.com",
            "company": "Maison Example",
            "created_at": "2019-04-03T10:15:30+0000",
        })))
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    let user = manager.get("buyer@example.com").await.unwrap().unwrap();

    assert_eq!(user.email.as_deref(), Some("buyer@example.com"));
    assert!(user.created_at.is_some());
}

#[tokio::test]
async fn test_get_not_found_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    assert!(manager.get("unknown@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_server_error_is_logged_absence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    assert!(manager.get("buyer@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_strips_nulls_and_timestamps_from_payload() {
    let server = MockServer::start().await;

    let mut user = sample_user();
    user.created_at = Some(chrono::Utc::now());

    // The wire payload must carry only the set attributes, without the
    // server-owned timestamps
    Mock::given(method("POST"))
        .and(path("/api/showroom/users/register"))
        .and(body_json(json!({
            "email": "buyer@example.com",
            "firstname": "Jane",
            "lastname": "Doe",
            "company": "Maison Example",
            "address": "1 rue de la Paix, Paris",
            "country": "FR",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "email": "buyer@example.com",
            "slug": "buyer-example-com",
            "created_at": "2026-08-26T09:00:00+0000",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    let created = manager.create(&user).await.unwrap().unwrap();

    assert_eq!(created.slug.as_deref(), Some("buyer-example-com"));
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_create_forbidden_is_access_denied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    let result = manager.create(&sample_user()).await;

    assert!(matches!(result, Err(ManagerError::AccessDenied)));
}

#[tokio::test]
async fn test_create_conflict_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    assert!(manager.create(&sample_user()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_sends_key_value_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/showroom/users/find"))
        .and(query_param("key", "token"))
        .and(query_param("value", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "buyer@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    let user = manager.find_by("token", "abc123").await.unwrap().unwrap();

    assert_eq!(user.email.as_deref(), Some("buyer@example.com"));
}

#[tokio::test]
async fn test_find_by_not_found_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    assert!(manager.find_by("token", "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_patch_targets_account_by_email_query() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/showroom/users"))
        .and(query_param("email", "buyer@example.com"))
        .and(body_json(json!({"company": "New Maison"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "buyer@example.com",
            "company": "New Maison",
            "updated_at": "2026-08-26T09:00:00+0000",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    let updated = manager
        .patch("buyer@example.com", json!({"company": "New Maison"}))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.company.as_deref(), Some("New Maison"));
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_patch_unexpected_status_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad data"})))
        .mount(&server)
        .await;

    let manager = create_manager(&server);
    let result = manager
        .patch("buyer@example.com", json!({"company": ""}))
        .await
        .unwrap();

    assert!(result.is_none());
}
