use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioError, DeletePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepository;

pub struct DeletePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> DeletePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePortfolioUseCase for DeletePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, portfolio_id: Uuid) -> Result<(), DeletePortfolioError> {
        self.repository.delete_portfolio(portfolio_id).await?;
        info!(%portfolio_id, "Portfolio deleted");
        Ok(())
    }
}
