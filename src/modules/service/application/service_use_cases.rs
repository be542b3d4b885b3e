use std::sync::Arc;

use crate::modules::service::application::use_cases::{
    create_offering::CreateOfferingUseCase, delete_offering::DeleteOfferingUseCase,
    list_offerings::ListOfferingsUseCase, patch_offering::PatchOfferingUseCase,
};

#[derive(Clone)]
pub struct ServiceUseCases {
    pub create: Arc<dyn CreateOfferingUseCase + Send + Sync>,
    pub list_active: Arc<dyn ListOfferingsUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListOfferingsUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchOfferingUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteOfferingUseCase + Send + Sync>,
}
