use crate::{AuthError, Result as AuthErrorResult, Session, SessionState};

use cf_core::Role;

/// Gate a data mutation on the signed-in role.
#[track_caller]
pub fn require_role(state: &SessionState, role: Role) -> AuthErrorResult<&Session> {
    match state.session() {
        None => Err(AuthError::unauthorized("Sign in to continue")),
        Some(session) if session.role == role => Ok(session),
        Some(session) => Err(AuthError::role_mismatch(session.role, role)),
    }
}
