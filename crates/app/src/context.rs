//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, AuthSettings, PasswordAuthService},
    database::{self, Db},
    domain::{
        establishments::{EstablishmentsService, PgEstablishmentsService},
        promo_codes::{PgPromoCodesService, PromoCodesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Open the record store pool.
///
/// The caller keeps the returned handle to close it on shutdown.
///
/// # Errors
///
/// Returns an error when establishing a database connection fails.
pub async fn connect_database(url: &str) -> Result<Db, AppInitError> {
    database::connect(url)
        .await
        .map(Db::new)
        .map_err(AppInitError::Database)
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub establishments: Arc<dyn EstablishmentsService>,
    pub promo_codes: Arc<dyn PromoCodesService>,
}

impl AppContext {
    /// Build application context around an existing pool.
    #[must_use]
    pub fn from_db(db: Db, auth: AuthSettings) -> Self {
        Self {
            auth: Arc::new(PasswordAuthService::new(auth)),
            establishments: Arc::new(PgEstablishmentsService::new(db.clone())),
            promo_codes: Arc::new(PgPromoCodesService::new(db)),
        }
    }
}
