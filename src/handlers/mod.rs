//! HTTP handlers: the generic resource template plus per-entity create.

pub mod menu_item_review;
pub mod organization;
pub mod recommendation_request;
pub mod resource;

pub use menu_item_review::*;
pub use organization::*;
pub use recommendation_request::*;
pub use resource::*;
