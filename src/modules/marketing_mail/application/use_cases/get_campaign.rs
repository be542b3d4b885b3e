use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::marketing_mail::application::ports::outgoing::{
    MarketingMailRepository, MarketingMailRepositoryError,
};
use crate::modules::marketing_mail::domain::entities::MarketingMail;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetCampaignError {
    #[error("Campaign not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCampaignUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<MarketingMail, GetCampaignError>;
}

pub struct GetCampaignService<R>
where
    R: MarketingMailRepository,
{
    repository: R,
}

impl<R> GetCampaignService<R>
where
    R: MarketingMailRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCampaignUseCase for GetCampaignService<R>
where
    R: MarketingMailRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<MarketingMail, GetCampaignError> {
        self.repository.find_by_id(id).await.map_err(|e| match e {
            MarketingMailRepositoryError::NotFound => GetCampaignError::NotFound,
            other => GetCampaignError::QueryFailed(other.to_string()),
        })
    }
}
