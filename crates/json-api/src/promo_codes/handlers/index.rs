//! Promo Code Index Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    auth::session::require_session,
    errors::ApiError,
    extensions::*,
    promo_codes::{
        errors::into_api_error, requests::listing_filter, responses::PromoCodeResponse,
    },
    state::State,
};

/// List Promo Codes
///
/// Newest first, each with the name of the establishment that used it and its
/// current status. `status` is one of `all`, `free`, `used`, `expired`,
/// `not_started`; `q` searches codes and notes.
#[endpoint(tags("promo"), summary = "List Promo Codes")]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    q: QueryParam<String, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<PromoCodeResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    require_session(req, state)?;

    let filter = listing_filter(status.into_inner(), q.into_inner())?;
    let now = Timestamp::now();

    let promo_codes = state
        .app
        .promo_codes
        .list_promo_codes(filter, now)
        .await
        .map_err(into_api_error)?;

    Ok(Json(
        promo_codes
            .into_iter()
            .map(|promo| PromoCodeResponse::from_record(promo, now))
            .collect(),
    ))
}
