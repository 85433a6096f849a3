//! Request-time route gating on the session cookie.

use std::sync::Arc;

use salvo::prelude::*;

use crate::{auth::cookie::session_state, errors::ApiError, extensions::*, state::State};

pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const HOME_PATH: &str = "/";

const AUTH_API_PATH: &str = "/api/auth";
const API_PREFIX: &str = "/api";

/// Paths reachable without a session that are not part of the login flow.
const PUBLIC_PATHS: [&str; 3] = ["/healthcheck", "/docs", "/api-doc"];

/// Outcome of gating a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RouteDecision {
    Pass,
    RedirectToLogin,
    RedirectToHome,
    Unauthorized,
}

/// `path` equals `prefix` or lies beneath it.
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

pub(crate) fn route_decision(path: &str, has_session: bool) -> RouteDecision {
    if is_under(path, AUTH_API_PATH) || PUBLIC_PATHS.iter().any(|public| is_under(path, public)) {
        return RouteDecision::Pass;
    }

    if path == LOGIN_PATH {
        return if has_session {
            RouteDecision::RedirectToHome
        } else {
            RouteDecision::Pass
        };
    }

    if has_session {
        RouteDecision::Pass
    } else if is_under(path, API_PREFIX) {
        RouteDecision::Unauthorized
    } else {
        RouteDecision::RedirectToLogin
    }
}

#[salvo::handler]
pub(crate) async fn route_filter(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let has_session = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => session_state(req, state).is_authenticated(),
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let decision = route_decision(req.uri().path(), has_session);

    match decision {
        RouteDecision::Pass => {
            ctrl.call_next(req, depot, res).await;
        }
        RouteDecision::RedirectToLogin => {
            res.render(Redirect::found(LOGIN_PATH));
            ctrl.skip_rest();
        }
        RouteDecision::RedirectToHome => {
            res.render(Redirect::found(HOME_PATH));
            ctrl.skip_rest();
        }
        RouteDecision::Unauthorized => {
            res.render(ApiError::unauthorized());
            ctrl.skip_rest();
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::{COOKIE, LOCATION},
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::{
        errors::ErrorResponse,
        test_helpers::{
            anonymous_auth, session_cookie_header, signed_in_auth, state, strict_establishments_mock,
            strict_promo_codes_mock,
        },
    };

    use super::*;

    #[test]
    fn auth_endpoint_always_passes() {
        for has_session in [false, true] {
            assert_eq!(route_decision("/api/auth", has_session), RouteDecision::Pass);
            assert_eq!(route_decision("/api/auth/extra", has_session), RouteDecision::Pass);
        }
    }

    #[test]
    fn anonymous_pages_redirect_to_login() {
        assert_eq!(route_decision("/", false), RouteDecision::RedirectToLogin);
        assert_eq!(route_decision("/settings", false), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn anonymous_api_calls_are_unauthorized() {
        assert_eq!(route_decision("/api/promo", false), RouteDecision::Unauthorized);
        assert_eq!(route_decision("/api", false), RouteDecision::Unauthorized);
        assert_eq!(
            route_decision("/api/establishments/summary", false),
            RouteDecision::Unauthorized
        );
    }

    #[test]
    fn prefix_lookalikes_are_not_exempt() {
        assert_eq!(route_decision("/api/authx", false), RouteDecision::Unauthorized);
        assert_eq!(route_decision("/apiary", false), RouteDecision::RedirectToLogin);
        assert_eq!(route_decision("/docsx", false), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn login_page_depends_on_session() {
        assert_eq!(route_decision("/login", false), RouteDecision::Pass);
        assert_eq!(route_decision("/login", true), RouteDecision::RedirectToHome);
    }

    #[test]
    fn signed_in_requests_pass() {
        for path in ["/", "/api/promo", "/api/establishments", "/anything"] {
            assert_eq!(route_decision(path, true), RouteDecision::Pass, "{path}");
        }
    }

    #[test]
    fn public_paths_pass_without_session() {
        for path in ["/healthcheck", "/docs", "/docs/index.html", "/api-doc/openapi.json"] {
            assert_eq!(route_decision(path, false), RouteDecision::Pass, "{path}");
        }
    }

    #[salvo::handler]
    async fn reached(res: &mut Response) {
        res.render("reached");
    }

    fn make_service(signed_in: bool) -> Service {
        let auth = if signed_in {
            signed_in_auth()
        } else {
            anonymous_auth()
        };

        Service::new(
            Router::new()
                .hoop(salvo::affix_state::inject(state(
                    auth,
                    strict_establishments_mock(),
                    strict_promo_codes_mock(),
                )))
                .hoop(route_filter)
                .push(Router::with_path("login").get(reached))
                .push(Router::with_path("api/promo").get(reached))
                .push(Router::new().get(reached)),
        )
    }

    fn location(res: &Response) -> Option<String> {
        res.headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    #[tokio::test]
    async fn anonymous_home_redirects_to_login() -> TestResult {
        let res = TestClient::get("http://example.com/")
            .send(&make_service(false))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res).as_deref(), Some(LOGIN_PATH));

        Ok(())
    }

    #[tokio::test]
    async fn anonymous_api_call_gets_json_401() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/promo")
            .send(&make_service(false))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body.error, "Unauthorized");

        Ok(())
    }

    #[tokio::test]
    async fn signed_in_login_page_redirects_home() -> TestResult {
        let res = TestClient::get("http://example.com/login")
            .add_header(COOKIE, session_cookie_header(), true)
            .send(&make_service(true))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res).as_deref(), Some(HOME_PATH));

        Ok(())
    }

    #[tokio::test]
    async fn signed_in_home_is_served() -> TestResult {
        let mut res = TestClient::get("http://example.com/")
            .add_header(COOKIE, session_cookie_header(), true)
            .send(&make_service(true))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "reached");

        Ok(())
    }

    #[tokio::test]
    async fn forged_cookie_is_treated_as_anonymous() -> TestResult {
        let res = TestClient::get("http://example.com/")
            .add_header(COOKIE, "admin_session=authenticated", true)
            .send(&make_service(true))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location(&res).as_deref(), Some(LOGIN_PATH));

        Ok(())
    }
}
