//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use sea_orm::ConnectOptions;
use serde_json::Value;
use tower::ServiceExt;

use user_posts_api::api::create_router;
use user_posts_api::infra::{Database, RetryPolicy};
use user_posts_api::AppState;

/// Fresh in-memory SQLite database with the schema applied.
pub async fn test_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A single pooled connection keeps the in-memory database alive
    options.max_connections(1).min_connections(1);

    let database = Database::connect_with(options, &RetryPolicy::once())
        .await
        .expect("in-memory database");
    Arc::new(database)
}

/// Router backed by a fresh in-memory database.
pub async fn test_app() -> Router {
    create_router(AppState::from_database(test_database().await))
}

/// POST a JSON body and return the status with the decoded response body.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// GET a path and return the status with the decoded response body.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
