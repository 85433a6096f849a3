//! Update Promo Code Handler

use std::sync::Arc;

use restodocks_app::domain::promo_codes::records::PromoCodeId;
use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    auth::session::require_session,
    errors::{ApiError, OkResponse},
    extensions::*,
    promo_codes::{errors::into_api_error, requests::UpdatePromoCodeRequest},
    state::State,
};

/// Update Promo Code
///
/// Applies a sparse patch. Updating an id that does not exist succeeds without
/// effect.
#[endpoint(tags("promo"), summary = "Update Promo Code")]
#[tracing::instrument(
    name = "promo_codes.update",
    skip(json, req, depot),
    fields(promo_code_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<UpdatePromoCodeRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OkResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    require_session(req, state)?;

    let request = json.into_inner();
    let id = PromoCodeId::new(request.id);

    tracing::Span::current().record("promo_code_id", tracing::field::display(id));

    state
        .app
        .promo_codes
        .update_promo_code(id, request.into_patch()?)
        .await
        .map_err(into_api_error)?;

    Ok(OkResponse::json())
}
