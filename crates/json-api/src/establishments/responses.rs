//! Establishment response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use restodocks_app::domain::establishments::models::{DirectorySummary, EstablishmentOverview};

/// Placeholder shown when an establishment has no owner on record.
pub(crate) const NO_OWNER: &str = "—";

/// Establishment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EstablishmentResponse {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    pub default_currency: String,
    pub employee_count: usize,
    /// Owner's full name, or `—` when there is none
    pub owner_name: String,
    /// Owner's email, or `—` when there is none
    pub owner_email: String,
}

impl From<EstablishmentOverview> for EstablishmentResponse {
    fn from(overview: EstablishmentOverview) -> Self {
        let (owner_name, owner_email) = overview.owner.map_or_else(
            || (NO_OWNER.to_owned(), NO_OWNER.to_owned()),
            |owner| (owner.name, owner.email),
        );

        Self {
            id: overview.uuid.into_uuid(),
            name: overview.name,
            address: overview.address,
            created_at: overview.created_at.to_string(),
            default_currency: overview.default_currency,
            employee_count: overview.employee_count,
            owner_name,
            owner_email,
        }
    }
}

/// Directory Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DirectorySummaryResponse {
    pub establishments: usize,
    pub employees: usize,
}

impl From<DirectorySummary> for DirectorySummaryResponse {
    fn from(summary: DirectorySummary) -> Self {
        Self {
            establishments: summary.establishments,
            employees: summary.employees,
        }
    }
}
