use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, DeletePortfolioUseCase, GetPortfolioUseCase, GetPortfoliosUseCase,
    GetPublicPortfolioUseCase, PatchPortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub create: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPortfoliosUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchPortfolioUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
}
