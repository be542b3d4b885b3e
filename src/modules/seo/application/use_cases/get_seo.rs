use async_trait::async_trait;

use crate::modules::seo::application::ports::outgoing::SeoRepository;
use crate::modules::seo::domain::entities::SeoEntry;
use crate::shared::validation;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSeoError {
    #[error("SEO entry not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSeoUseCase: Send + Sync {
    async fn execute(&self, page: &str) -> Result<SeoEntry, GetSeoError>;
}

pub struct GetSeoService<R>
where
    R: SeoRepository,
{
    repository: R,
}

impl<R> GetSeoService<R>
where
    R: SeoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSeoUseCase for GetSeoService<R>
where
    R: SeoRepository + Send + Sync,
{
    async fn execute(&self, page: &str) -> Result<SeoEntry, GetSeoError> {
        // A key that cannot exist is simply not found.
        let page = validation::slug("page", page).map_err(|_| GetSeoError::NotFound)?;

        self.repository
            .find_by_page(&page)
            .await
            .map_err(|e| GetSeoError::QueryFailed(e.to_string()))?
            .ok_or(GetSeoError::NotFound)
    }
}
