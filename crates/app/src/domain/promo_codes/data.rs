//! Promo Codes Data

use jiff::Timestamp;

use crate::domain::{
    establishments::records::EstablishmentUuid,
    promo_codes::{errors::PromoCodesServiceError, records::PromoCodeRecord},
};

/// Validated payload for a new promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromoCode {
    code: String,
    note: Option<String>,
    starts_at: Option<Timestamp>,
    expires_at: Option<Timestamp>,
}

impl NewPromoCode {
    /// Trims `code` and drops a blank note. Casing is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`PromoCodesServiceError::InvalidCode`] when `code` is blank.
    pub fn new(
        code: &str,
        note: Option<String>,
        starts_at: Option<Timestamp>,
        expires_at: Option<Timestamp>,
    ) -> Result<Self, PromoCodesServiceError> {
        let code = code.trim();

        if code.is_empty() {
            return Err(PromoCodesServiceError::InvalidCode);
        }

        Ok(Self {
            code: code.to_owned(),
            note: note.filter(|note| !note.trim().is_empty()),
            starts_at,
            expires_at,
        })
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    #[must_use]
    pub const fn starts_at(&self) -> Option<Timestamp> {
        self.starts_at
    }

    #[must_use]
    pub const fn expires_at(&self) -> Option<Timestamp> {
        self.expires_at
    }
}

/// Sparse update. `None` leaves a column alone; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromoCodePatch {
    pub code: Option<String>,
    pub note: Option<Option<String>>,
    pub starts_at: Option<Option<Timestamp>>,
    pub expires_at: Option<Option<Timestamp>>,
    pub is_used: Option<bool>,
    pub used_at: Option<Option<Timestamp>>,
    pub used_by_establishment_uuid: Option<Option<EstablishmentUuid>>,
}

impl PromoCodePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flip usage. Marking used stamps `now` and keeps the existing establishment
    /// unless one is supplied; marking unused clears both.
    #[must_use]
    pub fn toggle_used(
        record: &PromoCodeRecord,
        establishment: Option<EstablishmentUuid>,
        now: Timestamp,
    ) -> Self {
        if record.is_used {
            return Self {
                is_used: Some(false),
                used_at: Some(None),
                used_by_establishment_uuid: Some(None),
                ..Self::default()
            };
        }

        Self {
            is_used: Some(true),
            used_at: Some(Some(now)),
            used_by_establishment_uuid: establishment.map(Some),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn starts_at(starts_at: Option<Timestamp>) -> Self {
        Self {
            starts_at: Some(starts_at),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn expires_at(expires_at: Option<Timestamp>) -> Self {
        Self {
            expires_at: Some(expires_at),
            ..Self::default()
        }
    }
}
