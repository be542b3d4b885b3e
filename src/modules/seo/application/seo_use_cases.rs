use std::sync::Arc;

use crate::modules::seo::application::use_cases::{
    delete_seo::DeleteSeoUseCase, get_seo::GetSeoUseCase, list_seo::ListSeoUseCase,
    upsert_seo::UpsertSeoUseCase,
};

#[derive(Clone)]
pub struct SeoUseCases {
    pub get: Arc<dyn GetSeoUseCase + Send + Sync>,
    pub list: Arc<dyn ListSeoUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertSeoUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSeoUseCase + Send + Sync>,
}
