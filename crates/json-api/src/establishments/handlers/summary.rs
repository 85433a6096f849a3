//! Establishment Summary Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::session::require_session,
    errors::ApiError,
    establishments::{errors::into_api_error, responses::DirectorySummaryResponse},
    extensions::*,
    state::State,
};

/// Establishment Totals
#[endpoint(tags("establishments"), summary = "Establishment and employee totals")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DirectorySummaryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    require_session(req, state)?;

    let summary = state
        .app
        .establishments
        .summary()
        .await
        .map_err(into_api_error)?;

    Ok(Json(summary.into()))
}
