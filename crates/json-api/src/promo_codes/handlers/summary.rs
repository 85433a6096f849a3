//! Promo Code Summary Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;

use crate::{
    auth::session::require_session,
    errors::ApiError,
    extensions::*,
    promo_codes::{errors::into_api_error, responses::PromoSummaryResponse},
    state::State,
};

/// Promo Code Totals
///
/// Number of codes in each status right now.
#[endpoint(tags("promo"), summary = "Promo code totals per status")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PromoSummaryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    require_session(req, state)?;

    let summary = state
        .app
        .promo_codes
        .summary(Timestamp::now())
        .await
        .map_err(into_api_error)?;

    Ok(Json(summary.into()))
}
