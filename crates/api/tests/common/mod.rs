//! Common test utilities for integration tests.
//!
//! Every test gets its own app over a freshly seeded in-memory store, so
//! tests never share state.

// Not every integration test binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use persistence::Store;
use property_hub_api::{
    app::{create_app, create_app_with_notifications},
    config::Config,
};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub use persistence::fixtures::ids;

/// Test configuration built from embedded defaults.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

/// App over a seeded store. The store handle is returned for direct assertions.
pub fn create_test_app() -> (Router, Store) {
    let store = Store::seeded(Utc::now());
    (create_app(test_config(), store.clone()), store)
}

/// App over a seeded store with a recording notification service.
pub fn create_test_app_with_mock_notifications(
) -> (Router, Arc<domain::services::MockNotificationService>) {
    let store = Store::seeded(Utc::now());
    let notifications = Arc::new(domain::services::MockNotificationService::new());
    let app = create_app_with_notifications(test_config(), store, notifications.clone());
    (app, notifications)
}

/// App over a seeded store whose notification delivery always fails.
pub fn create_test_app_with_failing_notifications() -> Router {
    let store = Store::seeded(Utc::now());
    let notifications = Arc::new(domain::services::MockNotificationService::failing());
    create_app_with_notifications(test_config(), store, notifications)
}

/// Build a GET request as `user_id`.
pub fn get_as(uri: &str, user_id: Uuid) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("X-User-Id", user_id.to_string())
        .body(Body::empty())
        .unwrap()
}

/// Build a GET request without the user header.
pub fn get_no_auth(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a POST request with a JSON body as `user_id`.
pub fn post_json_as(uri: &str, user_id: Uuid, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("X-User-Id", user_id.to_string())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a POST request without a body as `user_id`.
pub fn post_as(uri: &str, user_id: Uuid) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("X-User-Id", user_id.to_string())
        .body(Body::empty())
        .unwrap()
}

/// Parse response body as JSON, `Null` when it is not JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// Send a request and return the status with the parsed body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}
