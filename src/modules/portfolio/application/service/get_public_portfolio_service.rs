use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPublicPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioQuery, PortfolioView,
};

pub struct GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicPortfolioUseCase for GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<PortfolioView, GetPortfolioError> {
        let slug = slug.trim().to_lowercase();

        if slug.is_empty() {
            return Err(GetPortfolioError::NotFound);
        }

        self.query
            .get_by_slug(&slug)
            .await
            .map_err(GetPortfolioError::from)
    }
}
