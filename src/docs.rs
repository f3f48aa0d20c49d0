//! Generated OpenAPI description of the entity schemas.

use utoipa::OpenApi;

use crate::entities::{MenuItemReview, Organization, RecommendationRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "campus-api",
        description = "Role-gated CRUD API for campus organizations, menu item reviews, and recommendation requests"
    ),
    components(schemas(Organization, MenuItemReview, RecommendationRequest))
)]
pub struct ApiDoc;
