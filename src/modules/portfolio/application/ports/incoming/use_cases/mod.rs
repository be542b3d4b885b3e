mod create_portfolio;
mod delete_portfolio;
mod get_portfolio;
mod get_portfolios;
mod get_public_portfolio;
mod patch_portfolio;

pub use create_portfolio::{CreatePortfolioCommand, CreatePortfolioError, CreatePortfolioUseCase};
pub use delete_portfolio::{DeletePortfolioError, DeletePortfolioUseCase};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use get_portfolios::{GetPortfoliosError, GetPortfoliosUseCase};
pub use get_public_portfolio::GetPublicPortfolioUseCase;
pub use patch_portfolio::{PatchPortfolioCommand, PatchPortfolioError, PatchPortfolioUseCase};
