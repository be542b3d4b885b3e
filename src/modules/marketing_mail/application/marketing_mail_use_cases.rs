use std::sync::Arc;

use crate::modules::marketing_mail::application::use_cases::{
    create_campaign::CreateCampaignUseCase, delete_campaign::DeleteCampaignUseCase,
    get_campaign::GetCampaignUseCase, list_campaigns::ListCampaignsUseCase,
    send_campaign::SendCampaignUseCase,
};

#[derive(Clone)]
pub struct MarketingMailUseCases {
    pub create: Arc<dyn CreateCampaignUseCase + Send + Sync>,
    pub list: Arc<dyn ListCampaignsUseCase + Send + Sync>,
    pub get: Arc<dyn GetCampaignUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCampaignUseCase + Send + Sync>,
    pub send: Arc<dyn SendCampaignUseCase + Send + Sync>,
}
