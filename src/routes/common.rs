//! Common routes: health, version, and the generated OpenAPI document.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;

use crate::docs::ApiDoc;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Unauthenticated routes: GET /health, GET /version, GET /api-docs/openapi.json.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/api-docs/openapi.json", get(openapi))
}
