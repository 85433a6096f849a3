//! Establishment Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Establishment UUID
pub type EstablishmentUuid = TypedUuid<EstablishmentRecord>;

/// Employee UUID
pub type EmployeeUuid = TypedUuid<EmployeeRecord>;

/// Role tag marking an establishment's owner.
pub const OWNER_ROLE: &str = "owner";

/// Establishment Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstablishmentRecord {
    pub uuid: EstablishmentUuid,
    pub name: String,
    pub address: Option<String>,
    pub default_currency: String,
    pub created_at: Timestamp,
}

/// Employee Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub uuid: EmployeeUuid,
    pub full_name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub establishment_uuid: EstablishmentUuid,
}

impl EmployeeRecord {
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.roles.iter().any(|role| role == OWNER_ROLE)
    }
}
