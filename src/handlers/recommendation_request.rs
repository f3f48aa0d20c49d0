//! Recommendation request create: query-bound fields, surrogate key from
//! the store.

use std::sync::Arc;

use axum::{extract::State, http::Uri, Json};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::auth::{CurrentUser, Role};
use crate::entities::RecommendationRequest;
use crate::error::ApiError;
use crate::handlers::resource::bind_query;
use crate::policy::require_role;
use crate::store::EntityStore;

/// Fields accepted by the recommendation request create endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendationRequest {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

pub async fn create_recommendation_request(
    caller: CurrentUser,
    State(store): State<Arc<dyn EntityStore<RecommendationRequest>>>,
    uri: Uri,
) -> Result<Json<RecommendationRequest>, ApiError> {
    require_role(&caller, Role::Admin)?;
    let fields: NewRecommendationRequest = bind_query(&uri)?;
    let record = RecommendationRequest {
        id: 0,
        requester_email: fields.requester_email,
        professor_email: fields.professor_email,
        explanation: fields.explanation,
        date_requested: fields.date_requested,
        date_needed: fields.date_needed,
        done: fields.done,
    };
    let saved = store.save(record).await;
    tracing::info!(id = saved.id, "recommendation request created");
    Ok(Json(saved))
}
