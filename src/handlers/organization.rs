//! Organization create: query-bound discrete fields, natural key from input.

use std::sync::Arc;

use axum::{extract::State, http::Uri, Json};
use serde::Deserialize;

use crate::auth::{CurrentUser, Role};
use crate::entities::Organization;
use crate::error::ApiError;
use crate::handlers::resource::bind_query;
use crate::policy::require_role;
use crate::store::EntityStore;

/// Fields accepted by the organization create endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub org_code: String,
    pub short_label: String,
    pub long_label: String,
    pub inactive: bool,
}

/// The key value supplied here becomes the record's identity.
pub async fn create_organization(
    caller: CurrentUser,
    State(store): State<Arc<dyn EntityStore<Organization>>>,
    uri: Uri,
) -> Result<Json<Organization>, ApiError> {
    require_role(&caller, Role::Admin)?;
    let fields: NewOrganization = bind_query(&uri)?;
    let record = Organization {
        org_code: fields.org_code,
        short_label: fields.short_label,
        long_label: fields.long_label,
        inactive: fields.inactive,
    };
    let saved = store.save(record).await;
    tracing::info!(org_code = %saved.org_code, "organization created");
    Ok(Json(saved))
}
