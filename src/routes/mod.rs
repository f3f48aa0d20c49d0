//! Route assembly.

mod common;
mod entity;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

pub use common::common_routes;
pub use entity::{
    api_routes, menu_item_review_routes, organization_routes, recommendation_request_routes,
};

/// The complete application: common routes plus all entity routes, with the
/// request body cap from `config`.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
}
