//! Health, OpenAPI and failure handling through the full router.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use sea_orm::DbErr;
use serde_json::json;

use common::{get, post_json, test_app, test_database};
use user_posts_api::api::create_router;
use user_posts_api::errors::{AppError, AppResult};
use user_posts_api::services::{PostService, Services, UserService};
use user_posts_api::{AppState, NewPost, NewUser, PostResponse, User};

// =============================================================================
// Failing services
// =============================================================================

/// Every write fails the way a dropped database connection would.
struct BrokenStore;

#[async_trait]
impl UserService for BrokenStore {
    async fn create_user(&self, _new_user: NewUser) -> AppResult<User> {
        Err(AppError::Database(DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "connection refused by 10.0.0.7".to_string(),
        )))
        .saving("user"))
    }
}

#[async_trait]
impl PostService for BrokenStore {
    async fn create_post(&self, _new_post: NewPost) -> AppResult<PostResponse> {
        Err(AppError::Database(DbErr::Custom("deadlock detected".to_string())).saving("post"))
    }
}

async fn broken_app() -> axum::Router {
    let services = Services::new(Arc::new(BrokenStore), Arc::new(BrokenStore));
    create_router(AppState::new(services, test_database().await))
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "healthy", "services": {"database": {"status": "healthy"}}})
    );
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users"]["post"].is_object());
    assert!(body["paths"]["/posts"]["post"].is_object());
}

#[tokio::test]
async fn test_user_save_failure_is_generic_500() {
    let app = broken_app().await;

    let (status, body) = post_json(
        &app,
        "/users",
        json!({"firstName": "Ana", "lastName": "Silva", "email": "ana@x.com"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    assert_eq!(body["error"]["message"], "Error saving user.");
    assert!(!body.to_string().contains("10.0.0.7"));
}

#[tokio::test]
async fn test_post_save_failure_is_generic_500() {
    let app = broken_app().await;

    let (status, body) = post_json(
        &app,
        "/posts",
        json!({"title": "Hi", "description": "x", "userId": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Error saving post.");
    assert!(!body.to_string().contains("deadlock"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app().await;

    let (status, _) = get(&app, "/comments").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
