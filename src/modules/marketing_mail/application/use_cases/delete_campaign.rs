use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::marketing_mail::application::ports::outgoing::{
    MarketingMailRepository, MarketingMailRepositoryError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteCampaignError {
    #[error("Campaign not found")]
    NotFound,

    #[error("Campaign is being sent")]
    Sending,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCampaignUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCampaignError>;
}

pub struct DeleteCampaignService<R>
where
    R: MarketingMailRepository,
{
    repository: R,
}

impl<R> DeleteCampaignService<R>
where
    R: MarketingMailRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCampaignUseCase for DeleteCampaignService<R>
where
    R: MarketingMailRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCampaignError> {
        self.repository.delete(id).await.map_err(|e| match e {
            MarketingMailRepositoryError::NotFound => DeleteCampaignError::NotFound,
            MarketingMailRepositoryError::InvalidState(_) => DeleteCampaignError::Sending,
            other => DeleteCampaignError::RepositoryError(other.to_string()),
        })?;

        info!(campaign_id = %id, "Marketing campaign deleted");
        Ok(())
    }
}
