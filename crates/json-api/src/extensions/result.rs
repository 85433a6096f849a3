//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::warn;

use crate::errors::ApiError;

/// Reject bad client input with the parser's own message.
pub(crate) trait ResultExt<T> {
    fn or_400(self) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self) -> Result<T, ApiError> {
        self.map_err(|error| {
            warn!("rejected request input: {error}");

            ApiError::bad_request(error.to_string())
        })
    }
}
