//! Tests for the unauthenticated common routes.

mod common;

use axum::http::StatusCode;
use common::{get, test_app};

#[tokio::test]
async fn health_answers_without_authentication() {
    let (router, _) = test_app();
    let (status, body) = get(&router, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn version_reports_the_crate() {
    let (router, _) = test_app();
    let (status, body) = get(&router, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "campus-api");
}

#[tokio::test]
async fn openapi_document_lists_the_entity_schemas() {
    let (router, _) = test_app();
    let (status, body) = get(&router, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let schemas = &body["components"]["schemas"];
    assert!(schemas.get("Organization").is_some());
    assert!(schemas.get("MenuItemReview").is_some());
    assert!(schemas.get("RecommendationRequest").is_some());
}
