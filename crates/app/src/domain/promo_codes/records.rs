//! Promo Code Records

use std::{fmt, num::ParseIntError, str::FromStr};

use jiff::Timestamp;

use crate::domain::{
    establishments::records::EstablishmentUuid,
    promo_codes::validity::{PromoValidity, classify},
};

/// Store-generated promo code identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PromoCodeId(i64);

impl PromoCodeId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PromoCodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PromoCodeId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse().map(Self)
    }
}

/// Promo Code Record, joined with the name of the establishment that used it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCodeRecord {
    pub id: PromoCodeId,
    pub code: String,
    pub is_used: bool,
    pub used_at: Option<Timestamp>,
    pub used_by_establishment_uuid: Option<EstablishmentUuid>,
    pub note: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub establishment_name: Option<String>,
}

impl PromoCodeRecord {
    /// Validity of this code as of `now`.
    #[must_use]
    pub fn validity(&self, now: Timestamp) -> PromoValidity {
        classify(self.is_used, self.starts_at, self.expires_at, now)
    }
}
