//! Delete Promo Code Handler

use std::sync::Arc;

use restodocks_app::domain::promo_codes::records::PromoCodeId;
use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    auth::session::require_session,
    errors::{ApiError, OkResponse},
    extensions::*,
    promo_codes::{errors::into_api_error, requests::DeletePromoCodeRequest},
    state::State,
};

/// Delete Promo Code
///
/// Permanent. Deleting an id that does not exist succeeds.
#[endpoint(tags("promo"), summary = "Delete Promo Code")]
pub(crate) async fn handler(
    json: JsonBody<DeletePromoCodeRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OkResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    require_session(req, state)?;

    let id = PromoCodeId::new(json.into_inner().id);

    state
        .app
        .promo_codes
        .delete_promo_code(id)
        .await
        .map_err(into_api_error)?;

    info!(%id, "delete requested for promo code");

    Ok(OkResponse::json())
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use restodocks_app::domain::promo_codes::MockPromoCodesService;

    use crate::test_helpers::{
        anonymous_auth, service, session_cookie_header, signed_in_auth, state,
        strict_establishments_mock, strict_promo_codes_mock,
    };

    use super::*;

    #[tokio::test]
    async fn deleting_twice_succeeds_both_times() -> TestResult {
        let mut promo_codes = MockPromoCodesService::new();

        promo_codes
            .expect_delete_promo_code()
            .times(2)
            .withf(|id| *id == PromoCodeId::new(3))
            .returning(|_| Ok(()));

        let service = service(
            state(signed_in_auth(), strict_establishments_mock(), promo_codes),
            Router::with_path("api/promo").delete(handler),
        );

        for _ in 0..2 {
            let mut res = TestClient::delete("http://example.com/api/promo")
                .add_header(COOKIE, session_cookie_header(), true)
                .json(&json!({ "id": 3 }))
                .send(&service)
                .await;

            let body: OkResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::OK));
            assert!(body.ok);
        }

        Ok(())
    }

    #[tokio::test]
    async fn requires_session() -> TestResult {
        let service = service(
            state(
                anonymous_auth(),
                strict_establishments_mock(),
                strict_promo_codes_mock(),
            ),
            Router::with_path("api/promo").delete(handler),
        );

        let res = TestClient::delete("http://example.com/api/promo")
            .json(&json!({ "id": 3 }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
