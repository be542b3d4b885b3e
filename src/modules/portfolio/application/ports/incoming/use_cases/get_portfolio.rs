use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioQueryError, PortfolioView,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PortfolioQueryError> for GetPortfolioError {
    fn from(err: PortfolioQueryError) -> Self {
        match err {
            PortfolioQueryError::NotFound => GetPortfolioError::NotFound,
            PortfolioQueryError::DatabaseError(msg)
            | PortfolioQueryError::SerializationError(msg) => GetPortfolioError::QueryFailed(msg),
        }
    }
}

/// Admin read by id.
#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self, portfolio_id: Uuid) -> Result<PortfolioView, GetPortfolioError>;
}
