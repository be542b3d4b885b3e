use async_trait::async_trait;
use chrono::Utc;

use crate::modules::ad::application::ports::outgoing::AdRepository;
use crate::modules::ad::domain::entities::{Ad, AdPlacement};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListActiveAdsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListActiveAdsUseCase: Send + Sync {
    async fn execute(&self, placement: Option<AdPlacement>) -> Result<Vec<Ad>, ListActiveAdsError>;
}

pub struct ListActiveAdsService<R>
where
    R: AdRepository,
{
    repository: R,
}

impl<R> ListActiveAdsService<R>
where
    R: AdRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListActiveAdsUseCase for ListActiveAdsService<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, placement: Option<AdPlacement>) -> Result<Vec<Ad>, ListActiveAdsError> {
        let now = Utc::now();

        let ads = self
            .repository
            .list_enabled(placement)
            .await
            .map_err(|e| ListActiveAdsError::QueryFailed(e.to_string()))?;

        Ok(ads.into_iter().filter(|ad| ad.is_live(now)).collect())
    }
}
