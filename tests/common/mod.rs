//! Shared helpers for driving the full router in tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use campus_api::{app, AppState, ServerConfig};
use tower::ServiceExt;

/// Role headers used across the suites. Admins also carry USER, matching
/// how the upstream proxy reports privileged accounts.
pub const USER: &str = "USER";
pub const ADMIN: &str = "ADMIN,USER";

/// The app plus the state handle, so suites can seed stores directly.
pub fn test_app() -> (Router, AppState) {
    let state = AppState::in_memory();
    (app(state.clone(), &ServerConfig::default()), state)
}

/// One request through the router; returns status and parsed JSON body
/// (`Null` when the body is empty).
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    roles: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(roles) = roles {
        builder = builder.header("x-roles", roles);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(router: &Router, uri: &str, roles: Option<&str>) -> (StatusCode, serde_json::Value) {
    send(router, "GET", uri, roles, None).await
}
