//! Test Helpers
//!
//! Establishments and employees are owned by the main platform, so tests seed
//! them with plain inserts.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::query;

use crate::{
    domain::establishments::records::{EmployeeUuid, EstablishmentUuid},
    test::TestContext,
};

pub(crate) async fn insert_establishment(
    ctx: &TestContext,
    name: &str,
    created_at: &str,
) -> Result<EstablishmentUuid, sqlx::Error> {
    let uuid = EstablishmentUuid::new();
    let created_at: Timestamp = created_at
        .parse()
        .expect("test timestamps should be RFC 3339");

    query("INSERT INTO establishments (id, name, created_at) VALUES ($1, $2, $3)")
        .bind(uuid)
        .bind(name)
        .bind(SqlxTimestamp::from(created_at))
        .execute(ctx.db.pool())
        .await?;

    Ok(uuid)
}

pub(crate) async fn insert_employee(
    ctx: &TestContext,
    establishment: EstablishmentUuid,
    full_name: &str,
    roles: &[&str],
) -> Result<EmployeeUuid, sqlx::Error> {
    let uuid = EmployeeUuid::new();
    let email = format!("{}@example.test", full_name.to_lowercase().replace(' ', "."));
    let roles: Vec<String> = roles.iter().map(|role| (*role).to_owned()).collect();

    query(
        "INSERT INTO employees (id, full_name, email, roles, establishment_id) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(uuid)
    .bind(full_name)
    .bind(email)
    .bind(roles)
    .bind(establishment)
    .execute(ctx.db.pool())
    .await?;

    Ok(uuid)
}
