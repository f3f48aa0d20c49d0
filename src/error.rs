//! Typed errors and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::entity::Entity;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Lookup miss. The key is rendered in its natural string form
    /// (numeric keys without locale formatting).
    #[error("{entity} with id {key} not found")]
    NotFound { entity: &'static str, key: String },
    /// Caller lacks the required role. Status only; no body contract.
    #[error("access denied")]
    Forbidden,
    /// Malformed or missing key parameter at the binding edge.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Not-found for entity type `E` and `key`.
    pub fn not_found<E: Entity>(key: &E::Key) -> Self {
        ApiError::NotFound {
            entity: E::TYPE_NAME,
            key: key.to_string(),
        }
    }
}

/// External error body: an error kind tag plus a human-readable message.
/// This object, not a stack trace, is what callers observe.
#[derive(Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    kind: "EntityNotFoundException",
                    message: self.to_string(),
                }),
            )
                .into_response(),
            ApiError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            ApiError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    kind: "BadRequestException",
                    message: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{MenuItemReview, Organization};

    #[test]
    fn not_found_messages_use_the_entity_name_and_verbatim_key() {
        let by_code = ApiError::not_found::<Organization>(&"ZZ".to_string());
        assert_eq!(by_code.to_string(), "Organizations with id ZZ not found");

        let by_id = ApiError::not_found::<MenuItemReview>(&15);
        assert_eq!(by_id.to_string(), "MenuItemReview with id 15 not found");
    }

    #[test]
    fn statuses_match_the_error_kind() {
        let key = "ZZ".to_string();
        assert_eq!(
            ApiError::not_found::<Organization>(&key).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::BadRequest("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
