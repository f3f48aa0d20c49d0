use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::Entity;

/// A campus organization, keyed by its organization code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Natural key; immutable once the record exists. Defaulted so update
    /// bodies may omit it (the stored key wins either way).
    #[serde(default)]
    pub org_code: String,
    pub short_label: String,
    pub long_label: String,
    pub inactive: bool,
}

impl Entity for Organization {
    type Key = String;

    const TYPE_NAME: &'static str = "Organizations";
    const KEY_PARAM: &'static str = "orgCode";

    fn key(&self) -> String {
        self.org_code.clone()
    }

    fn set_key(&mut self, key: String) {
        self.org_code = key;
    }

    fn apply_update(&mut self, incoming: &Self) {
        self.short_label = incoming.short_label.clone();
        self.long_label = incoming.long_label.clone();
        self.inactive = incoming.inactive;
    }
}
