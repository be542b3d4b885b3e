use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::service::application::ports::outgoing::{
    OfferingRepository, OfferingRepositoryError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteOfferingError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteOfferingUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteOfferingError>;
}

pub struct DeleteOfferingService<R>
where
    R: OfferingRepository,
{
    repository: R,
}

impl<R> DeleteOfferingService<R>
where
    R: OfferingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteOfferingUseCase for DeleteOfferingService<R>
where
    R: OfferingRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteOfferingError> {
        self.repository.delete(id).await.map_err(|e| match e {
            OfferingRepositoryError::NotFound => DeleteOfferingError::NotFound,
            other => DeleteOfferingError::RepositoryError(other.to_string()),
        })?;

        info!(service_id = %id, "Service deleted");
        Ok(())
    }
}
