use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeletePortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PortfolioRepositoryError> for DeletePortfolioError {
    fn from(err: PortfolioRepositoryError) -> Self {
        match err {
            PortfolioRepositoryError::NotFound => DeletePortfolioError::NotFound,
            other => DeletePortfolioError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeletePortfolioUseCase: Send + Sync {
    async fn execute(&self, portfolio_id: Uuid) -> Result<(), DeletePortfolioError>;
}
