use async_trait::async_trait;

use super::get_portfolio::GetPortfolioError;
use crate::modules::portfolio::application::ports::outgoing::portfolio_query::PortfolioView;

/// Public read by slug.
#[async_trait]
pub trait GetPublicPortfolioUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<PortfolioView, GetPortfolioError>;
}
