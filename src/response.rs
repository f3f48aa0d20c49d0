//! Response payloads that are not entity records.

use serde::Serialize;

use crate::entity::Entity;

/// Confirmation body returned by a successful delete.
#[derive(Serialize)]
pub struct DeletedMessage {
    pub message: String,
}

/// `"<EntityType> with id <key> deleted"` for entity type `E`.
pub fn deleted<E: Entity>(key: &E::Key) -> DeletedMessage {
    DeletedMessage {
        message: format!("{} with id {} deleted", E::TYPE_NAME, key),
    }
}
