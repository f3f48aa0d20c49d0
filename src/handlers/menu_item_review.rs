//! Menu item review create: query-bound fields, surrogate key from the store.

use std::sync::Arc;

use axum::{extract::State, http::Uri, Json};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::auth::{CurrentUser, Role};
use crate::entities::MenuItemReview;
use crate::error::ApiError;
use crate::handlers::resource::bind_query;
use crate::policy::require_role;
use crate::store::EntityStore;

/// Fields accepted by the review create endpoint. Star ratings outside
/// 0 to 5 are stored as given; the range is not enforced.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItemReview {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

pub async fn create_menu_item_review(
    caller: CurrentUser,
    State(store): State<Arc<dyn EntityStore<MenuItemReview>>>,
    uri: Uri,
) -> Result<Json<MenuItemReview>, ApiError> {
    require_role(&caller, Role::Admin)?;
    let fields: NewMenuItemReview = bind_query(&uri)?;
    let record = MenuItemReview {
        id: 0,
        item_id: fields.item_id,
        reviewer_email: fields.reviewer_email,
        stars: fields.stars,
        date_reviewed: fields.date_reviewed,
        comments: fields.comments,
    };
    let saved = store.save(record).await;
    tracing::info!(id = saved.id, item_id = saved.item_id, "review created");
    Ok(Json(saved))
}
