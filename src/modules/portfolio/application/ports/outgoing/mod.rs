pub mod portfolio_query;
pub mod portfolio_repository;
