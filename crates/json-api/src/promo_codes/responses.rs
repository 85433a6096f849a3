//! Promo code response bodies.

use jiff::Timestamp;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use restodocks_app::domain::promo_codes::{records::PromoCodeRecord, validity::PromoSummary};

/// Name of the establishment that used a code.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsedByEstablishment {
    pub name: String,
}

/// Promo Code Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromoCodeResponse {
    pub id: i64,
    pub code: String,
    pub is_used: bool,
    pub used_at: Option<String>,
    pub used_by_establishment_id: Option<Uuid>,
    pub note: Option<String>,
    pub starts_at: Option<String>,
    pub expires_at: Option<String>,
    pub created_at: String,
    /// Present when the code was used by a known establishment
    pub establishments: Option<UsedByEstablishment>,
    /// One of `free`, `used`, `expired`, `not_started`
    pub status: String,
}

impl PromoCodeResponse {
    /// Render `record` with its validity as of `now`.
    pub(crate) fn from_record(record: PromoCodeRecord, now: Timestamp) -> Self {
        let status = record.validity(now).as_str().to_owned();

        Self {
            id: record.id.into_inner(),
            code: record.code,
            is_used: record.is_used,
            used_at: record.used_at.map(|at| at.to_string()),
            used_by_establishment_id: record.used_by_establishment_uuid.map(Into::into),
            note: record.note,
            starts_at: record.starts_at.map(|at| at.to_string()),
            expires_at: record.expires_at.map(|at| at.to_string()),
            created_at: record.created_at.to_string(),
            establishments: record
                .establishment_name
                .map(|name| UsedByEstablishment { name }),
            status,
        }
    }
}

/// Promo Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromoSummaryResponse {
    pub total: usize,
    pub free: usize,
    pub used: usize,
    pub expired: usize,
    pub not_started: usize,
}

impl From<PromoSummary> for PromoSummaryResponse {
    fn from(summary: PromoSummary) -> Self {
        Self {
            total: summary.total,
            free: summary.free,
            used: summary.used,
            expired: summary.expired,
            not_started: summary.not_started,
        }
    }
}
