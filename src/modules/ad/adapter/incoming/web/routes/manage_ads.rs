use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::ad::application::ports::outgoing::PatchAdData;
use crate::modules::ad::application::use_cases::{
    create_ad::{CreateAdCommand, CreateAdData, CreateAdError},
    delete_ad::DeleteAdError,
    list_ads::ListAdsError,
    patch_ad::{PatchAdCommand, PatchAdError},
};
use crate::modules::ad::domain::entities::AdPlacement;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAdRequest {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub target_url: String,
    pub placement: AdPlacement,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl From<CreateAdRequest> for CreateAdData {
    fn from(req: CreateAdRequest) -> Self {
        CreateAdData {
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            target_url: req.target_url,
            placement: req.placement,
            is_active: req.is_active,
            starts_at: req.starts_at,
            ends_at: req.ends_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchAdRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub image_url: PatchField<String>,
    #[serde(default)]
    pub target_url: PatchField<String>,
    #[serde(default)]
    pub placement: PatchField<AdPlacement>,
    #[serde(default)]
    pub is_active: PatchField<bool>,
    #[serde(default)]
    pub starts_at: PatchField<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: PatchField<DateTime<Utc>>,
}

impl From<PatchAdRequest> for PatchAdData {
    fn from(req: PatchAdRequest) -> Self {
        PatchAdData {
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            target_url: req.target_url,
            placement: req.placement,
            is_active: req.is_active,
            starts_at: req.starts_at,
            ends_at: req.ends_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListAdsQuery {
    pub placement: Option<AdPlacement>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[post("/api/admin/ads")]
pub async fn create_ad_handler(
    _admin: AdminUser,
    req: web::Json<CreateAdRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateAdCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.ad.create.execute(command).await {
        Ok(ad) => ApiResponse::created(ad),
        Err(CreateAdError::RepositoryError(e)) => {
            error!("Failed to create ad: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/ads")]
pub async fn list_ads_handler(
    _admin: AdminUser,
    query: web::Query<ListAdsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page);

    match data.ad.list.execute(query.placement, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListAdsError::QueryFailed(e)) => {
            error!("Failed to list ads: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/ads/{ad_id}")]
pub async fn patch_ad_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchAdRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ad_id = path.into_inner();

    let command = match PatchAdCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.ad.patch.execute(ad_id, command).await {
        Ok(ad) => ApiResponse::success(ad),
        Err(err) => map_patch_error(ad_id, err),
    }
}

fn map_patch_error(ad_id: Uuid, err: PatchAdError) -> HttpResponse {
    match err {
        PatchAdError::NotFound => ApiResponse::not_found("AD_NOT_FOUND", "Ad not found"),
        PatchAdError::Invalid(e) => ApiResponse::invalid(&e),
        PatchAdError::RepositoryError(e) => {
            error!("Failed to patch ad {}: {}", ad_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/ads/{ad_id}")]
pub async fn delete_ad_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ad_id = path.into_inner();

    match data.ad.delete.execute(ad_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteAdError::NotFound) => ApiResponse::not_found("AD_NOT_FOUND", "Ad not found"),
        Err(DeleteAdError::RepositoryError(e)) => {
            error!("Failed to delete ad {}: {}", ad_id, e);
            ApiResponse::internal_error()
        }
    }
}
