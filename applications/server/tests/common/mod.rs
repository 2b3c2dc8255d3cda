//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{body::Body, http::Response, Router};
use porter_server::{config::ServerConfig, create_router, state::AppState};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-anon-key";
pub const JWT_SECRET: &str = "test-secret-key";

/// Configuration pointing at a mock store
pub fn test_config(store_url: &str) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.store.base_url = store_url.to_string();
    config.store.api_key = API_KEY.to_string();
    config.store.timeout_secs = 2;
    config.auth.jwt_secret = JWT_SECRET.to_string();
    config
}

/// Router wired to a mock store
pub fn create_test_app(store: &MockServer) -> Router {
    let state = AppState::from_config(&test_config(&store.uri())).unwrap();
    create_router(state)
}

/// Serve `rows` for a lookup of `username`
pub async fn mount_user_rows(store: &MockServer, username: &str, rows: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("username", format!("eq.{}", username)))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(store)
        .await;
}

/// Answer every other lookup with an empty result
pub async fn mount_empty_fallback(store: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .with_priority(10)
        .mount(store)
        .await;
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Test user records
pub mod fixtures {
    pub const TEST_USERNAME: &str = "alice";
    pub const TEST_PASSWORD: &str = "secret123";
    pub const TEST_EMAIL: &str = "alice@example.com";

    pub fn alice_row() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "username": TEST_USERNAME,
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
            "created_at": "2024-01-15T10:30:00+00:00",
            "is_active": true
        })
    }
}
