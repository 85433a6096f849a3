//! Toggle Promo Code Usage Handler

use std::sync::Arc;

use jiff::Timestamp;
use restodocks_app::domain::promo_codes::records::PromoCodeId;
use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    auth::session::require_session,
    errors::ApiError,
    extensions::*,
    promo_codes::{
        errors::into_api_error, requests::TogglePromoCodeRequest, responses::PromoCodeResponse,
    },
    state::State,
};

/// Toggle Promo Code Usage
///
/// Marks an unused code used (stamping the current time) or a used code
/// unused (clearing when and by whom).
#[endpoint(tags("promo"), summary = "Toggle Promo Code Usage")]
pub(crate) async fn handler(
    json: JsonBody<TogglePromoCodeRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PromoCodeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    require_session(req, state)?;

    let request = json.into_inner();
    let now = Timestamp::now();

    let toggled = state
        .app
        .promo_codes
        .toggle_used(
            PromoCodeId::new(request.id),
            request.establishment_id.map(Into::into),
            now,
        )
        .await
        .map_err(into_api_error)?;

    Ok(Json(PromoCodeResponse::from_record(toggled, now)))
}
