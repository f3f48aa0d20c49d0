use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::Entity;

/// A student's request for a recommendation letter from a professor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Surrogate key; 0 until the store assigns one.
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Entity for RecommendationRequest {
    type Key = i64;

    const TYPE_NAME: &'static str = "RecommendationRequest";
    const KEY_PARAM: &'static str = "id";

    fn key(&self) -> i64 {
        self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn apply_update(&mut self, incoming: &Self) {
        self.requester_email = incoming.requester_email.clone();
        self.professor_email = incoming.professor_email.clone();
        self.explanation = incoming.explanation.clone();
        self.date_requested = incoming.date_requested;
        self.date_needed = incoming.date_needed;
        self.done = incoming.done;
    }
}
