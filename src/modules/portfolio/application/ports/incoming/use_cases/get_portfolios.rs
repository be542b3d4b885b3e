use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioCard, PortfolioListFilter, PortfolioQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPortfoliosError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PortfolioQueryError> for GetPortfoliosError {
    fn from(err: PortfolioQueryError) -> Self {
        GetPortfoliosError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetPortfoliosUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: PortfolioListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PortfolioCard>, GetPortfoliosError>;
}
