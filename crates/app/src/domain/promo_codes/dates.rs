//! Validity-window date input.

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date `{0}`; expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct InvalidDateError(pub String);

/// Parse an optional window bound.
///
/// Blank input clears the bound. Plain dates are taken as midnight UTC.
///
/// # Errors
///
/// Returns an error when the input is neither a date nor a timestamp.
pub fn parse_bound(value: &str) -> Result<Option<Timestamp>, InvalidDateError> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(Some(timestamp));
    }

    value
        .parse::<Date>()
        .and_then(|date| date.to_zoned(TimeZone::UTC))
        .map(|zoned| Some(zoned.timestamp()))
        .map_err(|_| InvalidDateError(value.to_owned()))
}
