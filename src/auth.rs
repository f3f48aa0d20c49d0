//! Caller identity: roles parsed from the `x-roles` header.
//!
//! The transport assumes an authenticating reverse proxy that resolves
//! credentials and forwards the caller's roles. An absent or empty header
//! means the caller is anonymous and holds no roles.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::str::FromStr;

/// Header carrying the caller's roles, comma separated (e.g. `ADMIN,USER`).
pub const ROLES_HEADER: &str = "x-roles";

/// Caller role, ordered by privilege: an admin may do everything a user may.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    User,
    Admin,
}

impl FromStr for Role {
    type Err = ();

    /// Case-insensitive; a `ROLE_` prefix is tolerated for callers fed by
    /// systems that namespace their role names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("ROLE_").unwrap_or(s);
        if s.eq_ignore_ascii_case("user") {
            Ok(Role::User)
        } else if s.eq_ignore_ascii_case("admin") {
            Ok(Role::Admin)
        } else {
            Err(())
        }
    }
}

/// The authenticated caller. No roles means anonymous.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser {
    pub roles: Vec<Role>,
}

impl CurrentUser {
    /// True when any held role grants at least `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| *r >= role)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let roles = parts
            .headers
            .get(ROLES_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|raw| raw.split(',').filter_map(|s| s.parse().ok()).collect())
            .unwrap_or_default();
        Ok(CurrentUser { roles })
    }
}
