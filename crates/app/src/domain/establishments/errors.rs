//! Establishments service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstablishmentsServiceError {
    #[error("{0}")]
    Sql(#[from] sqlx::Error),
}
