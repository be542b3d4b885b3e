mod create_portfolio;
mod delete_portfolio;
mod get_portfolio;
mod get_portfolios;
mod get_public_portfolio;
mod patch_portfolio;

pub use create_portfolio::{create_portfolio_handler, CreatePortfolioRequest};
pub use delete_portfolio::delete_portfolio_handler;
pub use get_portfolio::get_portfolio_handler;
pub use get_portfolios::{
    __path_get_public_portfolios_handler, get_admin_portfolios_handler,
    get_public_portfolios_handler, GetPortfoliosQuery,
};
pub use get_public_portfolio::{__path_get_public_portfolio_handler, get_public_portfolio_handler};
pub use patch_portfolio::{patch_portfolio_handler, PatchPortfolioRequest};
