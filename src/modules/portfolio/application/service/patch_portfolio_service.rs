use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    PatchPortfolioCommand, PatchPortfolioError, PatchPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    PortfolioRepository, PortfolioRepositoryError, PortfolioResult,
};

pub struct PatchPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> PatchPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchPortfolioUseCase for PatchPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        portfolio_id: Uuid,
        command: PatchPortfolioCommand,
    ) -> Result<PortfolioResult, PatchPortfolioError> {
        self.repository
            .patch_portfolio(portfolio_id, command.into_data())
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => PatchPortfolioError::NotFound,
                other => PatchPortfolioError::RepositoryError(other.to_string()),
            })
    }
}
