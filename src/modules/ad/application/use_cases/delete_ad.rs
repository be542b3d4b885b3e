use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::ad::application::ports::outgoing::{AdRepository, AdRepositoryError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteAdError {
    #[error("Ad not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAdUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteAdError>;
}

pub struct DeleteAdService<R>
where
    R: AdRepository,
{
    repository: R,
}

impl<R> DeleteAdService<R>
where
    R: AdRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAdUseCase for DeleteAdService<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteAdError> {
        self.repository.delete(id).await.map_err(|e| match e {
            AdRepositoryError::NotFound => DeleteAdError::NotFound,
            other => DeleteAdError::RepositoryError(other.to_string()),
        })?;

        info!(ad_id = %id, "Ad deleted");
        Ok(())
    }
}
