//! Server configuration from environment variables, with logged fallbacks.

use std::env;
use std::net::SocketAddr;

const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Cap on incoming request bodies, enforced by the router layer.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read `BIND_ADDR` and `BODY_LIMIT_BYTES`. Absent or unparseable
    /// values fall back to the defaults with a log line.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("invalid BIND_ADDR '{}': {}, using {}", raw, e, defaults.bind_addr);
                defaults.bind_addr
            }),
            Err(_) => {
                tracing::info!("BIND_ADDR not set, using {}", defaults.bind_addr);
                defaults.bind_addr
            }
        };
        let body_limit_bytes = match env::var("BODY_LIMIT_BYTES") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("invalid BODY_LIMIT_BYTES '{}': {}", raw, e);
                defaults.body_limit_bytes
            }),
            Err(_) => defaults.body_limit_bytes,
        };
        Self {
            bind_addr,
            body_limit_bytes,
        }
    }
}
