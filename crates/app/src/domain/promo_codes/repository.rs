//! Promo Codes Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    establishments::records::EstablishmentUuid,
    promo_codes::{
        data::{NewPromoCode, PromoCodePatch},
        records::{PromoCodeId, PromoCodeRecord},
    },
};

const LIST_PROMO_CODES_SQL: &str = include_str!("sql/list_promo_codes.sql");
const GET_PROMO_CODE_SQL: &str = include_str!("sql/get_promo_code.sql");
const CREATE_PROMO_CODE_SQL: &str = include_str!("sql/create_promo_code.sql");
const UPDATE_PROMO_CODE_SQL: &str = include_str!("sql/update_promo_code.sql");
const DELETE_PROMO_CODE_SQL: &str = include_str!("sql/delete_promo_code.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromoCodesRepository;

impl PgPromoCodesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_promo_codes(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<PromoCodeRecord>, sqlx::Error> {
        query_as::<Postgres, PromoCodeRecord>(LIST_PROMO_CODES_SQL)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn get_promo_code(
        &self,
        pool: &PgPool,
        id: PromoCodeId,
    ) -> Result<PromoCodeRecord, sqlx::Error> {
        query_as::<Postgres, PromoCodeRecord>(GET_PROMO_CODE_SQL)
            .bind(id.into_inner())
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn create_promo_code(
        &self,
        pool: &PgPool,
        promo: &NewPromoCode,
    ) -> Result<PromoCodeRecord, sqlx::Error> {
        query_as::<Postgres, PromoCodeRecord>(CREATE_PROMO_CODE_SQL)
            .bind(promo.code())
            .bind(promo.note())
            .bind(promo.starts_at().map(SqlxTimestamp::from))
            .bind(promo.expires_at().map(SqlxTimestamp::from))
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn update_promo_code(
        &self,
        pool: &PgPool,
        id: PromoCodeId,
        patch: &PromoCodePatch,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PROMO_CODE_SQL)
            .bind(id.into_inner())
            .bind(patch.code.is_some())
            .bind(patch.code.as_deref())
            .bind(patch.note.is_some())
            .bind(patch.note.clone().flatten())
            .bind(patch.starts_at.is_some())
            .bind(sql_timestamp(patch.starts_at))
            .bind(patch.expires_at.is_some())
            .bind(sql_timestamp(patch.expires_at))
            .bind(patch.is_used.is_some())
            .bind(patch.is_used)
            .bind(patch.used_at.is_some())
            .bind(sql_timestamp(patch.used_at))
            .bind(patch.used_by_establishment_uuid.is_some())
            .bind(patch.used_by_establishment_uuid.flatten())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_promo_code(
        &self,
        pool: &PgPool,
        id: PromoCodeId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PROMO_CODE_SQL)
            .bind(id.into_inner())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn sql_timestamp(value: Option<Option<Timestamp>>) -> Option<SqlxTimestamp> {
    value.flatten().map(SqlxTimestamp::from)
}

impl<'r> FromRow<'r, PgRow> for PromoCodeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: PromoCodeId::new(row.try_get("id")?),
            code: row.try_get("code")?,
            is_used: row.try_get("is_used")?,
            used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("used_at")?
                .map(SqlxTimestamp::to_jiff),
            used_by_establishment_uuid: row
                .try_get::<Option<Uuid>, _>("used_by_establishment_id")?
                .map(EstablishmentUuid::from_uuid),
            note: row.try_get("note")?,
            starts_at: row
                .try_get::<Option<SqlxTimestamp>, _>("starts_at")?
                .map(SqlxTimestamp::to_jiff),
            expires_at: row
                .try_get::<Option<SqlxTimestamp>, _>("expires_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            establishment_name: row.try_get("establishment_name")?,
        })
    }
}
