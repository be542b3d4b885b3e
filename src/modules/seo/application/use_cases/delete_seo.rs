use async_trait::async_trait;
use tracing::info;

use crate::modules::seo::application::ports::outgoing::{SeoRepository, SeoRepositoryError};
use crate::shared::validation;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteSeoError {
    #[error("SEO entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSeoUseCase: Send + Sync {
    async fn execute(&self, page: &str) -> Result<(), DeleteSeoError>;
}

pub struct DeleteSeoService<R>
where
    R: SeoRepository,
{
    repository: R,
}

impl<R> DeleteSeoService<R>
where
    R: SeoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSeoUseCase for DeleteSeoService<R>
where
    R: SeoRepository + Send + Sync,
{
    async fn execute(&self, page: &str) -> Result<(), DeleteSeoError> {
        let page = validation::slug("page", page).map_err(|_| DeleteSeoError::NotFound)?;

        self.repository.delete(&page).await.map_err(|e| match e {
            SeoRepositoryError::NotFound => DeleteSeoError::NotFound,
            other => DeleteSeoError::RepositoryError(other.to_string()),
        })?;

        info!(page = %page, "SEO entry deleted");
        Ok(())
    }
}
