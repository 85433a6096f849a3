//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use restodocks_app::{
    auth::{MockAuthService, Session, SessionState},
    context::AppContext,
    domain::{establishments::MockEstablishmentsService, promo_codes::MockPromoCodesService},
};
use salvo::{
    affix_state::inject,
    http::{cookie::Cookie, header::SET_COOKIE},
    prelude::*,
};
use uuid::Uuid;

use crate::{auth::cookie::SESSION_COOKIE, state::State};

/// Token value the signed-in auth mock accepts.
pub(crate) const TEST_SESSION_TOKEN: &str = "rd_v1_test-session";

pub(crate) fn test_session() -> Session {
    Session {
        uuid: Uuid::nil(),
        expires_at: Timestamp::MAX,
    }
}

/// `Cookie` request header carrying [`TEST_SESSION_TOKEN`].
pub(crate) fn session_cookie_header() -> String {
    format!("{SESSION_COOKIE}={TEST_SESSION_TOKEN}")
}

/// Accepts [`TEST_SESSION_TOKEN`] and nothing else; never logs in.
pub(crate) fn signed_in_auth() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_session_state().returning(|token| {
        if token == TEST_SESSION_TOKEN {
            SessionState::Authenticated(test_session())
        } else {
            SessionState::Anonymous
        }
    });

    auth.expect_authenticate().never();

    auth
}

/// Rejects every token; never logs in.
pub(crate) fn anonymous_auth() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_session_state()
        .returning(|_| SessionState::Anonymous);

    auth.expect_authenticate().never();

    auth
}

pub(crate) fn strict_establishments_mock() -> MockEstablishmentsService {
    let mut establishments = MockEstablishmentsService::new();

    establishments.expect_list_establishments().never();
    establishments.expect_summary().never();

    establishments
}

pub(crate) fn strict_promo_codes_mock() -> MockPromoCodesService {
    let mut promo_codes = MockPromoCodesService::new();

    promo_codes.expect_list_promo_codes().never();
    promo_codes.expect_get_promo_code().never();
    promo_codes.expect_create_promo_code().never();
    promo_codes.expect_update_promo_code().never();
    promo_codes.expect_delete_promo_code().never();
    promo_codes.expect_toggle_used().never();
    promo_codes.expect_set_start_date().never();
    promo_codes.expect_set_end_date().never();
    promo_codes.expect_summary().never();

    promo_codes
}

pub(crate) fn state(
    auth: MockAuthService,
    establishments: MockEstablishmentsService,
    promo_codes: MockPromoCodesService,
) -> Arc<State> {
    State::from_app_context(
        AppContext {
            auth: Arc::new(auth),
            establishments: Arc::new(establishments),
            promo_codes: Arc::new(promo_codes),
        },
        false,
    )
}

pub(crate) fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// Cookie `name` as set on the response, read back from `Set-Cookie` when the
/// cookie jar has already been flushed into headers.
pub(crate) fn response_cookie(res: &Response, name: &str) -> Option<Cookie<'static>> {
    if let Some(cookie) = res.cookie(name) {
        return Some(cookie.clone());
    }

    res.headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|raw| Cookie::parse(raw.to_owned()).ok())
        .find(|cookie| cookie.name() == name)
}
