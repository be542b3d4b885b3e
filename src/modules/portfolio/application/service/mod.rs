mod create_portfolio_service;
mod delete_portfolio_service;
mod get_portfolio_service;
mod get_portfolios_service;
mod get_public_portfolio_service;
mod patch_portfolio_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_portfolio_service::CreatePortfolioService;
pub use delete_portfolio_service::DeletePortfolioService;
pub use get_portfolio_service::GetPortfolioService;
pub use get_portfolios_service::GetPortfoliosService;
pub use get_public_portfolio_service::GetPublicPortfolioService;
pub use patch_portfolio_service::PatchPortfolioService;
