use std::sync::Arc;

use crate::modules::ad::application::use_cases::{
    create_ad::CreateAdUseCase, delete_ad::DeleteAdUseCase,
    list_active_ads::ListActiveAdsUseCase, list_ads::ListAdsUseCase, patch_ad::PatchAdUseCase,
};

#[derive(Clone)]
pub struct AdUseCases {
    pub create: Arc<dyn CreateAdUseCase + Send + Sync>,
    pub list: Arc<dyn ListAdsUseCase + Send + Sync>,
    pub list_active: Arc<dyn ListActiveAdsUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchAdUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAdUseCase + Send + Sync>,
}
