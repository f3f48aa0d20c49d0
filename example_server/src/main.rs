//! Example server: the full route set backed by in-memory stores.
//!
//! Run from repo root: `cargo run -p example-server`
//! Roles come from the `x-roles` header (e.g. `x-roles: ADMIN,USER`),
//! normally set by an authenticating reverse proxy in front of this server.

use campus_api::{app, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campus_api=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::in_memory();
    let router = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
