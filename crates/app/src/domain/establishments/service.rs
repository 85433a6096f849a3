//! Establishments service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::establishments::{
        errors::EstablishmentsServiceError,
        models::{DirectorySummary, EstablishmentOverview, build_directory},
        records::EstablishmentUuid,
        repository::PgEstablishmentsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgEstablishmentsService {
    db: Db,
    repository: PgEstablishmentsRepository,
}

impl PgEstablishmentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgEstablishmentsRepository::new(),
        }
    }
}

#[async_trait]
impl EstablishmentsService for PgEstablishmentsService {
    async fn list_establishments(
        &self,
    ) -> Result<Vec<EstablishmentOverview>, EstablishmentsServiceError> {
        // Two independent reads; writes landing between them are not reflected.
        let establishments = self.repository.list_establishments(self.db.pool()).await?;

        let uuids: Vec<EstablishmentUuid> = establishments
            .iter()
            .map(|establishment| establishment.uuid)
            .collect();

        let employees = self
            .repository
            .list_employees_for(self.db.pool(), &uuids)
            .await?;

        debug!(
            establishments = establishments.len(),
            employees = employees.len(),
            "loaded establishment directory"
        );

        Ok(build_directory(establishments, &employees))
    }

    async fn summary(&self) -> Result<DirectorySummary, EstablishmentsServiceError> {
        let overviews = self.list_establishments().await?;

        Ok(DirectorySummary::from_overviews(&overviews))
    }
}

#[automock]
#[async_trait]
pub trait EstablishmentsService: Send + Sync {
    /// All establishments, newest first, with employee count and owner.
    async fn list_establishments(
        &self,
    ) -> Result<Vec<EstablishmentOverview>, EstablishmentsServiceError>;

    /// Establishment and employee totals.
    async fn summary(&self) -> Result<DirectorySummary, EstablishmentsServiceError>;
}
