use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioQuery, PortfolioView,
};

pub struct GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfolioUseCase for GetPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, portfolio_id: Uuid) -> Result<PortfolioView, GetPortfolioError> {
        self.query
            .get_by_id(portfolio_id)
            .await
            .map_err(GetPortfolioError::from)
    }
}
