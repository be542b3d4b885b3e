use async_trait::async_trait;

use crate::modules::seo::application::ports::outgoing::SeoRepository;
use crate::modules::seo::domain::entities::SeoEntry;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListSeoError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListSeoUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SeoEntry>, ListSeoError>;
}

pub struct ListSeoService<R>
where
    R: SeoRepository,
{
    repository: R,
}

impl<R> ListSeoService<R>
where
    R: SeoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListSeoUseCase for ListSeoService<R>
where
    R: SeoRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SeoEntry>, ListSeoError> {
        self.repository
            .list()
            .await
            .map_err(|e| ListSeoError::QueryFailed(e.to_string()))
    }
}
