//! Promo codes service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromoCodesServiceError {
    #[error("Promo code is required")]
    InvalidCode,

    #[error("promo code not found")]
    NotFound,

    /// Carries the store's own message through to callers.
    #[error("{0}")]
    Sql(#[source] Error),
}

impl From<Error> for PromoCodesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
