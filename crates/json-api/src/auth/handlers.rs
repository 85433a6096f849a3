//! Login and logout handlers.

use std::sync::Arc;

use restodocks_app::auth::AuthServiceError;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    auth::cookie::{cleared_session_cookie, session_cookie},
    errors::{ApiError, OkResponse},
    extensions::*,
    state::State,
};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub password: String,
}

fn into_api_error(error: AuthServiceError) -> ApiError {
    match error {
        AuthServiceError::InvalidPassword => {
            ApiError::new(StatusCode::UNAUTHORIZED, "Invalid password")
        }
        AuthServiceError::Token(source) => {
            error!("failed to sign session token: {source}");

            ApiError::internal(source.to_string())
        }
        AuthServiceError::Timestamp(source) => {
            error!("failed to compute session expiry: {source}");

            ApiError::internal(source.to_string())
        }
    }
}

/// Log In
///
/// Exchanges the admin password for a session cookie.
#[endpoint(tags("auth"), summary = "Log in")]
pub(crate) async fn login(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OkResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let issued = state
        .app
        .auth
        .authenticate(&json.into_inner().password)
        .map_err(into_api_error)?;

    info!(session = %issued.session.uuid, "admin signed in");

    res.add_cookie(session_cookie(issued.token, state.secure_cookies));

    Ok(OkResponse::json())
}

/// Log Out
///
/// Clears the session cookie. Always succeeds.
#[endpoint(tags("auth"), summary = "Log out")]
pub(crate) async fn logout(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OkResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    res.add_cookie(cleared_session_cookie(state.secure_cookies));

    Ok(OkResponse::json())
}
