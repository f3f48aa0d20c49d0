//! Shared application state: one store handle per entity type.

use std::sync::Arc;

use crate::entities::{MenuItemReview, Organization, RecommendationRequest};
use crate::store::{EntityStore, MemoryStore, NaturalKey, SurrogateKey};

#[derive(Clone)]
pub struct AppState {
    pub organizations: Arc<dyn EntityStore<Organization>>,
    pub menu_item_reviews: Arc<dyn EntityStore<MenuItemReview>>,
    pub recommendation_requests: Arc<dyn EntityStore<RecommendationRequest>>,
}

impl AppState {
    /// Fresh in-memory stores. Organizations keep their natural key; the
    /// numeric entities take surrogate keys from the store sequence.
    pub fn in_memory() -> Self {
        Self {
            organizations: Arc::new(MemoryStore::new(NaturalKey)),
            menu_item_reviews: Arc::new(MemoryStore::new(SurrogateKey)),
            recommendation_requests: Arc::new(MemoryStore::new(SurrogateKey)),
        }
    }
}
