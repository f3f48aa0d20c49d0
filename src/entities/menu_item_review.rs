use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::Entity;

/// A diner's review of one menu item. `item_id` references a menu item
/// record held elsewhere; the reference is not enforced here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    /// Surrogate key; 0 until the store assigns one.
    #[serde(default)]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    /// 0 to 5 by convention; the backend does not enforce the range.
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Entity for MenuItemReview {
    type Key = i64;

    const TYPE_NAME: &'static str = "MenuItemReview";
    const KEY_PARAM: &'static str = "id";

    fn key(&self) -> i64 {
        self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn apply_update(&mut self, incoming: &Self) {
        self.item_id = incoming.item_id;
        self.reviewer_email = incoming.reviewer_email.clone();
        self.stars = incoming.stars;
        self.date_reviewed = incoming.date_reviewed;
        self.comments = incoming.comments.clone();
    }
}
