use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioCommand, CreatePortfolioError, CreatePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    PortfolioRepository, PortfolioRepositoryError, PortfolioResult,
};

pub struct CreatePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> CreatePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePortfolioUseCase for CreatePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreatePortfolioCommand,
    ) -> Result<PortfolioResult, CreatePortfolioError> {
        let created = self
            .repository
            .create_portfolio(command.into_data())
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::SlugAlreadyExists => {
                    CreatePortfolioError::SlugAlreadyExists
                }
                PortfolioRepositoryError::NotFound => CreatePortfolioError::RepositoryError(
                    "unexpected not found while creating portfolio".to_string(),
                ),
                other => CreatePortfolioError::RepositoryError(other.to_string()),
            })?;

        info!(portfolio_id = %created.id, slug = %created.slug, "Portfolio created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::service::test_support::{
        sample_create_data, sample_portfolio, MockPortfolioRepository,
    };

    fn command() -> CreatePortfolioCommand {
        CreatePortfolioCommand::new(sample_create_data()).unwrap()
    }

    #[tokio::test]
    async fn returns_created_portfolio() {
        let expected = sample_portfolio();
        let service =
            CreatePortfolioService::new(MockPortfolioRepository::returning(Ok(expected.clone())));

        assert_eq!(service.execute(command()).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn maps_slug_conflict() {
        let service = CreatePortfolioService::new(MockPortfolioRepository::returning(Err(
            PortfolioRepositoryError::SlugAlreadyExists,
        )));

        assert_eq!(
            service.execute(command()).await.unwrap_err(),
            CreatePortfolioError::SlugAlreadyExists
        );
    }

    #[tokio::test]
    async fn maps_database_error() {
        let service = CreatePortfolioService::new(MockPortfolioRepository::returning(Err(
            PortfolioRepositoryError::DatabaseError("db down".to_string()),
        )));

        assert!(matches!(
            service.execute(command()).await.unwrap_err(),
            CreatePortfolioError::RepositoryError(msg) if msg.contains("db down")
        ));
    }
}
