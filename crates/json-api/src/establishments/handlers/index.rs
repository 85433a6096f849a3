//! Establishment Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::session::require_session,
    errors::ApiError,
    establishments::{errors::into_api_error, responses::EstablishmentResponse},
    extensions::*,
    state::State,
};

/// List Establishments
///
/// Every establishment, newest first, with its employee count and owner.
#[endpoint(tags("establishments"), summary = "List Establishments")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<EstablishmentResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    require_session(req, state)?;

    let establishments = state
        .app
        .establishments
        .list_establishments()
        .await
        .map_err(into_api_error)?;

    Ok(Json(establishments.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::{
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use restodocks_app::domain::establishments::{
        EstablishmentsServiceError, MockEstablishmentsService,
        models::{EstablishmentOverview, Owner},
        records::EstablishmentUuid,
    };

    use crate::{
        errors::ErrorResponse,
        establishments::responses::NO_OWNER,
        test_helpers::{
            anonymous_auth, service, session_cookie_header, signed_in_auth, state,
            strict_establishments_mock, strict_promo_codes_mock,
        },
    };

    use super::*;

    fn overview(name: &str, owner: Option<Owner>) -> EstablishmentOverview {
        EstablishmentOverview {
            uuid: EstablishmentUuid::new(),
            name: name.to_owned(),
            address: None,
            default_currency: "RUB".to_owned(),
            created_at: Timestamp::UNIX_EPOCH,
            employee_count: 3,
            owner,
        }
    }

    fn make_service(establishments: MockEstablishmentsService) -> Service {
        service(
            state(signed_in_auth(), establishments, strict_promo_codes_mock()),
            Router::with_path("api/establishments").get(handler),
        )
    }

    #[tokio::test]
    async fn lists_establishments_with_owner_or_placeholder() -> TestResult {
        let mut establishments = MockEstablishmentsService::new();

        establishments
            .expect_list_establishments()
            .once()
            .return_once(|| {
                Ok(vec![
                    overview(
                        "Newer Cafe",
                        Some(Owner {
                            name: "Olga".to_owned(),
                            email: "olga@example.test".to_owned(),
                        }),
                    ),
                    overview("Older Bistro", None),
                ])
            });

        establishments.expect_summary().never();

        let mut res = TestClient::get("http://example.com/api/establishments")
            .add_header(COOKIE, session_cookie_header(), true)
            .send(&make_service(establishments))
            .await;

        let body: Vec<EstablishmentResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let names: Vec<_> = body.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["Newer Cafe", "Older Bistro"]);

        let owners: Vec<_> = body
            .iter()
            .map(|row| (row.owner_name.as_str(), row.owner_email.as_str()))
            .collect();
        assert_eq!(owners, [("Olga", "olga@example.test"), (NO_OWNER, NO_OWNER)]);

        assert!(body.iter().all(|row| row.employee_count == 3));
        assert!(
            body.iter()
                .all(|row| row.created_at == "1970-01-01T00:00:00Z")
        );

        Ok(())
    }

    #[tokio::test]
    async fn store_failure_returns_500_with_message() -> TestResult {
        let mut establishments = MockEstablishmentsService::new();

        establishments
            .expect_list_establishments()
            .once()
            .return_once(|| Err(EstablishmentsServiceError::Sql(sqlx_error())));

        establishments.expect_summary().never();

        let mut res = TestClient::get("http://example.com/api/establishments")
            .add_header(COOKIE, session_cookie_header(), true)
            .send(&make_service(establishments))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(body.error.contains("pool timed out"), "{}", body.error);

        Ok(())
    }

    #[tokio::test]
    async fn missing_session_returns_401_without_store_access() -> TestResult {
        let service = service(
            state(
                anonymous_auth(),
                strict_establishments_mock(),
                strict_promo_codes_mock(),
            ),
            Router::with_path("api/establishments").get(handler),
        );

        let mut res = TestClient::get("http://example.com/api/establishments")
            .send(&service)
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body.error, "Unauthorized");

        Ok(())
    }

    fn sqlx_error() -> sqlx::Error {
        sqlx::Error::PoolTimedOut
    }
}
