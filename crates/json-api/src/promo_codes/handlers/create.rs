//! Create Promo Code Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    auth::session::require_session,
    errors::ApiError,
    extensions::*,
    promo_codes::{
        errors::into_api_error, requests::CreatePromoCodeRequest, responses::PromoCodeResponse,
    },
    state::State,
};

/// Create Promo Code
///
/// Stores a new, unused code. The code is trimmed but its casing is kept, and
/// duplicates are accepted.
#[endpoint(tags("promo"), summary = "Create Promo Code")]
#[tracing::instrument(name = "promo_codes.create", skip_all, err)]
pub(crate) async fn handler(
    json: JsonBody<CreatePromoCodeRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PromoCodeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    require_session(req, state)?;

    let promo = json.into_inner().into_new_promo_code()?;

    let created = state
        .app
        .promo_codes
        .create_promo_code(promo)
        .await
        .map_err(into_api_error)?;

    Ok(Json(PromoCodeResponse::from_record(created, Timestamp::now())))
}
