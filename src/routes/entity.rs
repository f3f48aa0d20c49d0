//! Entity routes: one router per entity, all five operations, rooted at
//! `/api/<collection>`. Single-record routes carry the key as a query
//! parameter rather than a path segment.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::entities::{MenuItemReview, Organization, RecommendationRequest};
use crate::handlers::{
    create_menu_item_review, create_organization, create_recommendation_request, delete_by_key,
    get_by_key, list_all, update_by_key,
};
use crate::state::AppState;
use crate::store::EntityStore;

pub fn organization_routes(store: Arc<dyn EntityStore<Organization>>) -> Router {
    Router::new()
        .route("/api/organizations/all", get(list_all::<Organization>))
        .route("/api/organizations/post", post(create_organization))
        .route(
            "/api/organizations",
            get(get_by_key::<Organization>)
                .put(update_by_key::<Organization>)
                .delete(delete_by_key::<Organization>),
        )
        .with_state(store)
}

pub fn menu_item_review_routes(store: Arc<dyn EntityStore<MenuItemReview>>) -> Router {
    Router::new()
        .route("/api/menuitemreviews/all", get(list_all::<MenuItemReview>))
        .route("/api/menuitemreviews/post", post(create_menu_item_review))
        .route(
            "/api/menuitemreviews",
            get(get_by_key::<MenuItemReview>)
                .put(update_by_key::<MenuItemReview>)
                .delete(delete_by_key::<MenuItemReview>),
        )
        .with_state(store)
}

pub fn recommendation_request_routes(store: Arc<dyn EntityStore<RecommendationRequest>>) -> Router {
    Router::new()
        .route(
            "/api/recommendationrequests/all",
            get(list_all::<RecommendationRequest>),
        )
        .route(
            "/api/recommendationrequests/post",
            post(create_recommendation_request),
        )
        .route(
            "/api/recommendationrequests",
            get(get_by_key::<RecommendationRequest>)
                .put(update_by_key::<RecommendationRequest>)
                .delete(delete_by_key::<RecommendationRequest>),
        )
        .with_state(store)
}

/// All entity routes wired to the stores in `state`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(organization_routes(state.organizations))
        .merge(menu_item_review_routes(state.menu_item_reviews))
        .merge(recommendation_request_routes(state.recommendation_requests))
}
