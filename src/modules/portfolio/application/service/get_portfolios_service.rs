use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfoliosError, GetPortfoliosUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioCard, PortfolioListFilter, PortfolioQuery,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct GetPortfoliosService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPortfoliosService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfoliosUseCase for GetPortfoliosService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        mut filter: PortfolioListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PortfolioCard>, GetPortfoliosError> {
        filter.search = filter
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.query
            .list(filter, page)
            .await
            .map_err(GetPortfoliosError::from)
    }
}
