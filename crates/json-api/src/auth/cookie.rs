//! Session cookie construction and lookup.

use restodocks_app::auth::{SESSION_TTL_SECONDS, SessionState};
use salvo::{
    Request,
    http::cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::state::State;

/// Name of the cookie carrying the signed session token.
pub(crate) const SESSION_COOKIE: &str = "admin_session";

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(SESSION_TTL_SECONDS))
        .path("/")
        .build()
}

/// Overwrites the session cookie with an already-expired empty value.
pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .path("/")
        .build()
}

/// Session carried by the request's cookie, if any.
pub(crate) fn session_state(req: &Request, state: &State) -> SessionState {
    req.cookie(SESSION_COOKIE)
        .map_or(SessionState::Anonymous, |cookie| {
            state.app.auth.session_state(cookie.value())
        })
}
