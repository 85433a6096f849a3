//! Promo code request bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use restodocks_app::domain::promo_codes::{
    data::{NewPromoCode, PromoCodePatch},
    dates::parse_bound,
    validity::{PromoCodeFilter, parse_status_filter},
};

use crate::{errors::ApiError, extensions::*, promo_codes::errors::into_api_error};

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Blank strings count as `null`.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_optional_bound(value: Option<&str>) -> Result<Option<jiff::Timestamp>, ApiError> {
    value.map_or(Ok(None), |value| parse_bound(value).or_400())
}

/// Listing filter from the `status` and `q` query parameters.
pub(crate) fn listing_filter(
    status: Option<String>,
    search: Option<String>,
) -> Result<PromoCodeFilter, ApiError> {
    let status = status
        .as_deref()
        .map_or(Ok(None), parse_status_filter)
        .or_400()?;

    Ok(PromoCodeFilter {
        status,
        search: non_blank(search).map(|search| search.trim().to_owned()),
    })
}

/// Create Promo Code Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePromoCodeRequest {
    /// Code as entered; trimmed, must not be blank
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub note: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339
    #[serde(default)]
    pub starts_at: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl CreatePromoCodeRequest {
    pub(crate) fn into_new_promo_code(self) -> Result<NewPromoCode, ApiError> {
        let starts_at = parse_optional_bound(self.starts_at.as_deref())?;
        let expires_at = parse_optional_bound(self.expires_at.as_deref())?;

        NewPromoCode::new(&self.code, non_blank(self.note), starts_at, expires_at)
            .map_err(into_api_error)
    }
}

/// Update Promo Code Request
///
/// Only the listed fields are applied; anything else in the body is ignored.
/// An explicit `null` clears a nullable column.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePromoCodeRequest {
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[salvo(schema(value_type = Option<String>))]
    pub note: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[salvo(schema(value_type = Option<String>))]
    pub starts_at: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[salvo(schema(value_type = Option<String>))]
    pub expires_at: Option<Option<String>>,
    #[serde(default)]
    pub is_used: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    #[salvo(schema(value_type = Option<String>))]
    pub used_at: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[salvo(schema(value_type = Option<Uuid>))]
    pub used_by_establishment_id: Option<Option<Uuid>>,
}

impl UpdatePromoCodeRequest {
    pub(crate) fn into_patch(self) -> Result<PromoCodePatch, ApiError> {
        let bound = |value: Option<Option<String>>| {
            value
                .map(|value| parse_optional_bound(value.as_deref()))
                .transpose()
        };

        Ok(PromoCodePatch {
            code: self.code,
            note: self.note.map(non_blank),
            starts_at: bound(self.starts_at)?,
            expires_at: bound(self.expires_at)?,
            is_used: self.is_used,
            used_at: bound(self.used_at)?,
            used_by_establishment_uuid: self
                .used_by_establishment_id
                .map(|establishment| establishment.map(Into::into)),
        })
    }
}

/// Delete Promo Code Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeletePromoCodeRequest {
    pub id: i64,
}

/// Toggle Promo Code Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TogglePromoCodeRequest {
    pub id: i64,
    /// Establishment to record when marking the code used
    #[serde(default)]
    pub establishment_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::json;
    use testresult::TestResult;

    use restodocks_app::domain::{
        establishments::records::EstablishmentUuid, promo_codes::validity::PromoValidity,
    };

    use super::*;

    fn update(body: serde_json::Value) -> TestResult<UpdatePromoCodeRequest> {
        Ok(serde_json::from_value(body)?)
    }

    #[test]
    fn patch_ignores_fields_outside_the_allow_list() -> TestResult {
        let patch =
            update(json!({ "id": 1, "is_used": true, "admin_override": "x" }))?.into_patch()?;

        assert_eq!(
            patch,
            PromoCodePatch {
                is_used: Some(true),
                ..PromoCodePatch::default()
            }
        );

        Ok(())
    }

    #[test]
    fn patch_distinguishes_null_from_absent() -> TestResult {
        let patch = update(json!({ "id": 1, "expires_at": null }))?.into_patch()?;

        assert_eq!(patch.expires_at, Some(None));
        assert_eq!(patch.starts_at, None);
        assert_eq!(patch.note, None);

        Ok(())
    }

    #[test]
    fn patch_parses_dates_and_establishment() -> TestResult {
        let establishment = Uuid::nil();

        let patch = update(json!({
            "id": 1,
            "starts_at": "2026-05-01",
            "used_at": "2026-05-02T10:00:00Z",
            "used_by_establishment_id": establishment,
            "note": "  ",
        }))?
        .into_patch()?;

        assert_eq!(patch.starts_at, Some(Some("2026-05-01T00:00:00Z".parse()?)));
        assert_eq!(patch.used_at, Some(Some("2026-05-02T10:00:00Z".parse()?)));
        assert_eq!(
            patch.used_by_establishment_uuid,
            Some(Some(EstablishmentUuid::from_uuid(establishment)))
        );
        assert_eq!(patch.note, Some(None));

        Ok(())
    }

    #[test]
    fn patch_rejects_unparseable_dates() -> TestResult {
        let result = update(json!({ "id": 1, "expires_at": "soon" }))?.into_patch();

        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn create_treats_blank_optionals_as_null() -> TestResult {
        let request: CreatePromoCodeRequest = serde_json::from_value(json!({
            "code": " BETA001 ",
            "note": "",
            "starts_at": "",
            "expires_at": "2026-12-31",
        }))?;

        let promo = request.into_new_promo_code()?;

        assert_eq!(promo.code(), "BETA001");
        assert_eq!(promo.note(), None);
        assert_eq!(promo.starts_at(), None);
        assert_eq!(
            promo.expires_at(),
            Some("2026-12-31T00:00:00Z".parse::<Timestamp>()?)
        );

        Ok(())
    }

    #[test]
    fn listing_filter_parses_status_and_trims_search() -> TestResult {
        let filter = listing_filter(Some("used".to_owned()), Some(" beta ".to_owned()))?;

        assert_eq!(filter.status, Some(PromoValidity::Used));
        assert_eq!(filter.search.as_deref(), Some("beta"));

        let unrestricted = listing_filter(Some("all".to_owned()), Some(String::new()))?;

        assert_eq!(unrestricted, PromoCodeFilter::default());

        assert!(listing_filter(Some("bogus".to_owned()), None).is_err());

        Ok(())
    }
}
