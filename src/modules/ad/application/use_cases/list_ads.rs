use async_trait::async_trait;

use crate::modules::ad::application::ports::outgoing::AdRepository;
use crate::modules::ad::domain::entities::{Ad, AdPlacement};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListAdsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Every ad regardless of state, for the admin dashboard.
#[async_trait]
pub trait ListAdsUseCase: Send + Sync {
    async fn execute(
        &self,
        placement: Option<AdPlacement>,
        page: PageRequest,
    ) -> Result<PageResult<Ad>, ListAdsError>;
}

pub struct ListAdsService<R>
where
    R: AdRepository,
{
    repository: R,
}

impl<R> ListAdsService<R>
where
    R: AdRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListAdsUseCase for ListAdsService<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(
        &self,
        placement: Option<AdPlacement>,
        page: PageRequest,
    ) -> Result<PageResult<Ad>, ListAdsError> {
        self.repository
            .list(placement, page)
            .await
            .map_err(|e| ListAdsError::QueryFailed(e.to_string()))
    }
}
