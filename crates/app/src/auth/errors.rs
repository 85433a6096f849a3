//! Auth service errors.

use thiserror::Error;

use crate::auth::SessionTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Wrong password, or no admin password configured.
    #[error("Invalid password")]
    InvalidPassword,

    #[error("session token processing error")]
    Token(#[source] SessionTokenError),

    #[error("session expiry out of range")]
    Timestamp(#[from] jiff::Error),
}

impl From<SessionTokenError> for AuthServiceError {
    fn from(error: SessionTokenError) -> Self {
        Self::Token(error)
    }
}
