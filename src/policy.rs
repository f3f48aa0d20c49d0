//! The access policy gate: one check at the top of every handler operation.

use crate::auth::{CurrentUser, Role};
use crate::error::ApiError;

/// True when any of the caller's roles grants at least `required`.
pub fn allows(caller: &CurrentUser, required: Role) -> bool {
    caller.has_role(required)
}

/// Reject the call with `Forbidden` unless the caller holds `required`.
/// A denial is terminal for the call; there is no retry.
pub fn require_role(caller: &CurrentUser, required: Role) -> Result<(), ApiError> {
    if allows(caller, required) {
        Ok(())
    } else {
        tracing::debug!(?required, roles = ?caller.roles, "access denied");
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_roles(roles: &[Role]) -> CurrentUser {
        CurrentUser { roles: roles.to_vec() }
    }

    #[test]
    fn anonymous_is_rejected_for_every_operation() {
        let anonymous = CurrentUser::default();
        assert!(require_role(&anonymous, Role::User).is_err());
        assert!(require_role(&anonymous, Role::Admin).is_err());
    }

    #[test]
    fn a_user_may_read_but_not_write() {
        let user = with_roles(&[Role::User]);
        assert!(require_role(&user, Role::User).is_ok());
        assert!(require_role(&user, Role::Admin).is_err());
    }

    #[test]
    fn an_admin_may_do_everything() {
        let admin = with_roles(&[Role::Admin]);
        assert!(require_role(&admin, Role::User).is_ok());
        assert!(require_role(&admin, Role::Admin).is_ok());
    }

    #[test]
    fn denial_maps_to_forbidden() {
        let user = with_roles(&[Role::User]);
        match require_role(&user, Role::Admin) {
            Err(ApiError::Forbidden) => {}
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }
}
