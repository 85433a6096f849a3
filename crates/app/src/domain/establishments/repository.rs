//! Establishments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::establishments::records::{
    EmployeeRecord, EmployeeUuid, EstablishmentRecord, EstablishmentUuid,
};

const LIST_ESTABLISHMENTS_SQL: &str = include_str!("sql/list_establishments.sql");
const LIST_EMPLOYEES_SQL: &str = include_str!("sql/list_employees_for_establishments.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEstablishmentsRepository;

impl PgEstablishmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_establishments(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<EstablishmentRecord>, sqlx::Error> {
        query_as::<Postgres, EstablishmentRecord>(LIST_ESTABLISHMENTS_SQL)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn list_employees_for(
        &self,
        pool: &PgPool,
        establishments: &[EstablishmentUuid],
    ) -> Result<Vec<EmployeeRecord>, sqlx::Error> {
        let ids: Vec<Uuid> = establishments.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, EmployeeRecord>(LIST_EMPLOYEES_SQL)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for EstablishmentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: EstablishmentUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            default_currency: row.try_get("default_currency")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for EmployeeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: EmployeeUuid::from_uuid(row.try_get("id")?),
            full_name: row.try_get("full_name")?,
            email: row.try_get("email")?,
            roles: row.try_get("roles")?,
            establishment_uuid: EstablishmentUuid::from_uuid(row.try_get("establishment_id")?),
        })
    }
}
