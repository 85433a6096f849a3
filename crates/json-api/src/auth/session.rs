//! Per-handler session guard.

use restodocks_app::auth::{Session, SessionState};
use salvo::Request;

use crate::{auth::cookie::session_state, errors::ApiError, state::State};

/// Require a verified session; protected handlers call this before any store
/// access.
pub(crate) fn require_session(req: &Request, state: &State) -> Result<Session, ApiError> {
    match session_state(req, state) {
        SessionState::Authenticated(session) => Ok(session),
        SessionState::Anonymous => Err(ApiError::unauthorized()),
    }
}
