//! The resource handler template, generic over the entity type.
//!
//! Create is the one operation whose input shape differs per entity, so each
//! entity module supplies its own create handler; list, get, update, and
//! delete are instantiated from these functions.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::auth::{CurrentUser, Role};
use crate::entity::Entity;
use crate::error::ApiError;
use crate::policy::require_role;
use crate::response::{deleted, DeletedMessage};
use crate::store::EntityStore;

/// Bind query-string fields into `T` after the role check has passed, so an
/// unauthorized caller sees the access denial rather than a binding error.
pub(crate) fn bind_query<T: DeserializeOwned>(uri: &Uri) -> Result<T, ApiError> {
    Query::<T>::try_from_uri(uri)
        .map(|Query(fields)| fields)
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// The entity's key, taken from its key query parameter.
fn key_from_query<E: Entity>(params: &HashMap<String, String>) -> Result<E::Key, ApiError> {
    let raw = params.get(E::KEY_PARAM).ok_or_else(|| {
        ApiError::BadRequest(format!("required parameter '{}' is missing", E::KEY_PARAM))
    })?;
    raw.parse().map_err(|_| {
        ApiError::BadRequest(format!(
            "invalid value '{}' for parameter '{}'",
            raw,
            E::KEY_PARAM
        ))
    })
}

/// Every record in insertion order. No filtering, no pagination.
pub async fn list_all<E>(
    caller: CurrentUser,
    State(store): State<Arc<dyn EntityStore<E>>>,
) -> Result<Json<Vec<E>>, ApiError>
where
    E: Entity + Serialize,
{
    require_role(&caller, Role::User)?;
    Ok(Json(store.list().await))
}

pub async fn get_by_key<E>(
    caller: CurrentUser,
    State(store): State<Arc<dyn EntityStore<E>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<E>, ApiError>
where
    E: Entity + Serialize,
{
    require_role(&caller, Role::User)?;
    let key = key_from_query::<E>(&params)?;
    let record = store
        .get(&key)
        .await
        .ok_or_else(|| ApiError::not_found::<E>(&key))?;
    Ok(Json(record))
}

/// Whole-record replacement: every non-key field is overwritten from the
/// body, and the stored key wins over any key value the body carries.
pub async fn update_by_key<E>(
    caller: CurrentUser,
    State(store): State<Arc<dyn EntityStore<E>>>,
    Query(params): Query<HashMap<String, String>>,
    body: Option<Json<E>>,
) -> Result<Json<E>, ApiError>
where
    E: Entity + Serialize + DeserializeOwned,
{
    require_role(&caller, Role::Admin)?;
    let key = key_from_query::<E>(&params)?;
    let Json(incoming) = body
        .ok_or_else(|| ApiError::BadRequest("request body must be a JSON object".into()))?;
    let mut record = store
        .get(&key)
        .await
        .ok_or_else(|| ApiError::not_found::<E>(&key))?;
    record.apply_update(&incoming);
    let saved = store.save(record).await;
    tracing::info!(entity = E::TYPE_NAME, key = %key, "updated");
    Ok(Json(saved))
}

pub async fn delete_by_key<E>(
    caller: CurrentUser,
    State(store): State<Arc<dyn EntityStore<E>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<DeletedMessage>, ApiError>
where
    E: Entity,
{
    require_role(&caller, Role::Admin)?;
    let key = key_from_query::<E>(&params)?;
    if !store.delete(&key).await {
        return Err(ApiError::not_found::<E>(&key));
    }
    tracing::info!(entity = E::TYPE_NAME, key = %key, "deleted");
    Ok(Json(deleted::<E>(&key)))
}
