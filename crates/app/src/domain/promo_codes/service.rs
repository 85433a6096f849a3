//! Promo codes service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        establishments::records::EstablishmentUuid,
        promo_codes::{
            data::{NewPromoCode, PromoCodePatch},
            errors::PromoCodesServiceError,
            records::{PromoCodeId, PromoCodeRecord},
            repository::PgPromoCodesRepository,
            validity::{PromoCodeFilter, PromoSummary},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgPromoCodesService {
    db: Db,
    repository: PgPromoCodesRepository,
}

impl PgPromoCodesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPromoCodesRepository::new(),
        }
    }
}

#[async_trait]
impl PromoCodesService for PgPromoCodesService {
    async fn list_promo_codes(
        &self,
        filter: PromoCodeFilter,
        now: Timestamp,
    ) -> Result<Vec<PromoCodeRecord>, PromoCodesServiceError> {
        let mut promo_codes = self.repository.list_promo_codes(self.db.pool()).await?;

        promo_codes.retain(|promo| filter.matches(promo, now));

        Ok(promo_codes)
    }

    async fn get_promo_code(
        &self,
        id: PromoCodeId,
    ) -> Result<PromoCodeRecord, PromoCodesServiceError> {
        Ok(self.repository.get_promo_code(self.db.pool(), id).await?)
    }

    async fn create_promo_code(
        &self,
        promo: NewPromoCode,
    ) -> Result<PromoCodeRecord, PromoCodesServiceError> {
        let created = self
            .repository
            .create_promo_code(self.db.pool(), &promo)
            .await?;

        info!(id = %created.id, code = %created.code, "promo code created");

        Ok(created)
    }

    async fn update_promo_code(
        &self,
        id: PromoCodeId,
        patch: PromoCodePatch,
    ) -> Result<(), PromoCodesServiceError> {
        if patch.is_empty() {
            debug!(%id, "empty promo code patch; nothing to apply");

            return Ok(());
        }

        let rows_affected = self
            .repository
            .update_promo_code(self.db.pool(), id, &patch)
            .await?;

        debug!(%id, rows_affected, "promo code patched");

        Ok(())
    }

    async fn delete_promo_code(&self, id: PromoCodeId) -> Result<(), PromoCodesServiceError> {
        let rows_affected = self
            .repository
            .delete_promo_code(self.db.pool(), id)
            .await?;

        if rows_affected > 0 {
            info!(%id, "promo code deleted");
        }

        Ok(())
    }

    async fn toggle_used(
        &self,
        id: PromoCodeId,
        establishment: Option<EstablishmentUuid>,
        now: Timestamp,
    ) -> Result<PromoCodeRecord, PromoCodesServiceError> {
        let current = self.repository.get_promo_code(self.db.pool(), id).await?;

        let patch = PromoCodePatch::toggle_used(&current, establishment, now);

        self.repository
            .update_promo_code(self.db.pool(), id, &patch)
            .await?;

        let toggled = self.repository.get_promo_code(self.db.pool(), id).await?;

        info!(%id, is_used = toggled.is_used, "promo code usage toggled");

        Ok(toggled)
    }

    async fn set_start_date(
        &self,
        id: PromoCodeId,
        starts_at: Option<Timestamp>,
    ) -> Result<(), PromoCodesServiceError> {
        self.update_promo_code(id, PromoCodePatch::starts_at(starts_at))
            .await
    }

    async fn set_end_date(
        &self,
        id: PromoCodeId,
        expires_at: Option<Timestamp>,
    ) -> Result<(), PromoCodesServiceError> {
        self.update_promo_code(id, PromoCodePatch::expires_at(expires_at))
            .await
    }

    async fn summary(&self, now: Timestamp) -> Result<PromoSummary, PromoCodesServiceError> {
        let promo_codes = self.repository.list_promo_codes(self.db.pool()).await?;

        Ok(PromoSummary::from_records(&promo_codes, now))
    }
}

#[automock]
#[async_trait]
pub trait PromoCodesService: Send + Sync {
    /// All codes matching `filter` as of `now`, newest first.
    async fn list_promo_codes(
        &self,
        filter: PromoCodeFilter,
        now: Timestamp,
    ) -> Result<Vec<PromoCodeRecord>, PromoCodesServiceError>;

    /// A single code by id.
    async fn get_promo_code(
        &self,
        id: PromoCodeId,
    ) -> Result<PromoCodeRecord, PromoCodesServiceError>;

    /// Store a new, unused code.
    async fn create_promo_code(
        &self,
        promo: NewPromoCode,
    ) -> Result<PromoCodeRecord, PromoCodesServiceError>;

    /// Apply a sparse patch. A missing id is not an error.
    async fn update_promo_code(
        &self,
        id: PromoCodeId,
        patch: PromoCodePatch,
    ) -> Result<(), PromoCodesServiceError>;

    /// Permanently delete a code. A missing id is not an error.
    async fn delete_promo_code(&self, id: PromoCodeId) -> Result<(), PromoCodesServiceError>;

    /// Flip a code between used and unused.
    async fn toggle_used(
        &self,
        id: PromoCodeId,
        establishment: Option<EstablishmentUuid>,
        now: Timestamp,
    ) -> Result<PromoCodeRecord, PromoCodesServiceError>;

    async fn set_start_date(
        &self,
        id: PromoCodeId,
        starts_at: Option<Timestamp>,
    ) -> Result<(), PromoCodesServiceError>;

    async fn set_end_date(
        &self,
        id: PromoCodeId,
        expires_at: Option<Timestamp>,
    ) -> Result<(), PromoCodesServiceError>;

    /// Counts per status as of `now`.
    async fn summary(&self, now: Timestamp) -> Result<PromoSummary, PromoCodesServiceError>;
}
