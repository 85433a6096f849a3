//! Promo code validity classification, filtering, and totals.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::domain::promo_codes::records::PromoCodeRecord;

/// Derived validity of a promo code at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromoValidity {
    Free,
    Used,
    Expired,
    NotStarted,
}

impl PromoValidity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Used => "used",
            Self::Expired => "expired",
            Self::NotStarted => "not_started",
        }
    }
}

impl fmt::Display for PromoValidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown promo status `{0}`")]
pub struct UnknownStatusError(pub String);

impl FromStr for PromoValidity {
    type Err = UnknownStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "free" => Ok(Self::Free),
            "used" => Ok(Self::Used),
            "expired" => Ok(Self::Expired),
            "not_started" => Ok(Self::NotStarted),
            other => Err(UnknownStatusError(other.to_owned())),
        }
    }
}

/// Classify a code. Usage wins over the window; open bounds never restrict.
#[must_use]
pub fn classify(
    is_used: bool,
    starts_at: Option<Timestamp>,
    expires_at: Option<Timestamp>,
    now: Timestamp,
) -> PromoValidity {
    if is_used {
        return PromoValidity::Used;
    }

    if starts_at.is_some_and(|starts_at| starts_at > now) {
        return PromoValidity::NotStarted;
    }

    if expires_at.is_some_and(|expires_at| expires_at < now) {
        return PromoValidity::Expired;
    }

    PromoValidity::Free
}

/// Parse a status filter where `all` (or nothing) means no restriction.
///
/// # Errors
///
/// Returns an error for anything other than `all` or a known status.
pub fn parse_status_filter(value: &str) -> Result<Option<PromoValidity>, UnknownStatusError> {
    match value.trim() {
        "" | "all" => Ok(None),
        status => status.parse().map(Some),
    }
}

/// Listing filter over status and free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromoCodeFilter {
    pub status: Option<PromoValidity>,
    pub search: Option<String>,
}

impl PromoCodeFilter {
    #[must_use]
    pub fn matches(&self, record: &PromoCodeRecord, now: Timestamp) -> bool {
        if let Some(status) = self.status
            && record.validity(now) != status
        {
            return false;
        }

        let Some(search) = self.search.as_deref().filter(|search| !search.is_empty()) else {
            return true;
        };

        let in_code = record.code.contains(&search.to_uppercase());
        let in_note = record
            .note
            .as_deref()
            .is_some_and(|note| note.to_lowercase().contains(&search.to_lowercase()));

        in_code || in_note
    }
}

/// Count of codes per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromoSummary {
    pub total: usize,
    pub free: usize,
    pub used: usize,
    pub expired: usize,
    pub not_started: usize,
}

impl PromoSummary {
    #[must_use]
    pub fn from_records(records: &[PromoCodeRecord], now: Timestamp) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;

            match record.validity(now) {
                PromoValidity::Free => summary.free += 1,
                PromoValidity::Used => summary.used += 1,
                PromoValidity::Expired => summary.expired += 1,
                PromoValidity::NotStarted => summary.not_started += 1,
            }

            summary
        })
    }
}
