use actix_web::{delete, get, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::marketing_mail::application::use_cases::{
    create_campaign::{CreateCampaignCommand, CreateCampaignData, CreateCampaignError},
    delete_campaign::DeleteCampaignError,
    get_campaign::GetCampaignError,
    list_campaigns::ListCampaignsError,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCampaignRequest {
    pub subject: String,
    pub html_body: String,
    pub recipients: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListCampaignsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[post("/api/admin/marketing-mail")]
pub async fn create_campaign_handler(
    _admin: AdminUser,
    req: web::Json<CreateCampaignRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match CreateCampaignCommand::new(CreateCampaignData {
        subject: req.subject,
        html_body: req.html_body,
        recipients: req.recipients,
    }) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.marketing_mail.create.execute(command).await {
        Ok(campaign) => ApiResponse::created(campaign),
        Err(CreateCampaignError::RepositoryError(e)) => {
            error!("Failed to create campaign: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/marketing-mail")]
pub async fn list_campaigns_handler(
    _admin: AdminUser,
    query: web::Query<ListCampaignsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.per_page);

    match data.marketing_mail.list.execute(page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListCampaignsError::QueryFailed(e)) => {
            error!("Failed to list campaigns: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/marketing-mail/{campaign_id}")]
pub async fn get_campaign_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let campaign_id = path.into_inner();

    match data.marketing_mail.get.execute(campaign_id).await {
        Ok(campaign) => ApiResponse::success(campaign),
        Err(GetCampaignError::NotFound) => {
            ApiResponse::not_found("CAMPAIGN_NOT_FOUND", "Campaign not found")
        }
        Err(GetCampaignError::QueryFailed(e)) => {
            error!("Failed to load campaign {}: {}", campaign_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/marketing-mail/{campaign_id}")]
pub async fn delete_campaign_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let campaign_id = path.into_inner();

    match data.marketing_mail.delete.execute(campaign_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCampaignError::NotFound) => {
            ApiResponse::not_found("CAMPAIGN_NOT_FOUND", "Campaign not found")
        }
        Err(DeleteCampaignError::Sending) => ApiResponse::conflict(
            "CAMPAIGN_SENDING",
            "Campaign is being sent and cannot be deleted",
        ),
        Err(DeleteCampaignError::RepositoryError(e)) => {
            error!("Failed to delete campaign {}: {}", campaign_id, e);
            ApiResponse::internal_error()
        }
    }
}
