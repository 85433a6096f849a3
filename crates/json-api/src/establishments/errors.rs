//! Establishment Errors

use tracing::error;

use restodocks_app::domain::establishments::EstablishmentsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: EstablishmentsServiceError) -> ApiError {
    match error {
        EstablishmentsServiceError::Sql(source) => {
            error!("failed to load establishments: {source}");

            ApiError::internal(source.to_string())
        }
    }
}
