//! Promo Code Errors

use tracing::error;

use restodocks_app::domain::promo_codes::PromoCodesServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: PromoCodesServiceError) -> ApiError {
    match error {
        PromoCodesServiceError::InvalidCode => ApiError::bad_request(error.to_string()),
        PromoCodesServiceError::NotFound => ApiError::not_found("Promo code not found"),
        PromoCodesServiceError::Sql(source) => {
            error!("promo code store failure: {source}");

            ApiError::internal(source.to_string())
        }
    }
}
