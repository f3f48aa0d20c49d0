//! Campus API: role-gated CRUD backend library.
//!
//! Three entity types behind one resource-handler template: every endpoint
//! runs one authorization check, one store call, and serializes the result.
//! A consumer wires [`app`] to a listener; see `example_server`.

pub mod auth;
pub mod config;
pub mod docs;
pub mod entities;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod policy;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use auth::{CurrentUser, Role};
pub use config::ServerConfig;
pub use entity::Entity;
pub use error::ApiError;
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{EntityStore, MemoryStore, NaturalKey, SurrogateKey};
