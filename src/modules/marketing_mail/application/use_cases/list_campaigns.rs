use async_trait::async_trait;

use crate::modules::marketing_mail::application::ports::outgoing::MarketingMailRepository;
use crate::modules::marketing_mail::domain::entities::MarketingMail;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListCampaignsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListCampaignsUseCase: Send + Sync {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<MarketingMail>, ListCampaignsError>;
}

pub struct ListCampaignsService<R>
where
    R: MarketingMailRepository,
{
    repository: R,
}

impl<R> ListCampaignsService<R>
where
    R: MarketingMailRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListCampaignsUseCase for ListCampaignsService<R>
where
    R: MarketingMailRepository + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<MarketingMail>, ListCampaignsError> {
        self.repository
            .list(page)
            .await
            .map_err(|e| ListCampaignsError::QueryFailed(e.to_string()))
    }
}
