use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::service::application::ports::outgoing::PatchOfferingData;
use crate::modules::service::application::use_cases::{
    create_offering::{CreateOfferingCommand, CreateOfferingData, CreateOfferingError},
    delete_offering::DeleteOfferingError,
    list_offerings::ListOfferingsError,
    patch_offering::{PatchOfferingCommand, PatchOfferingError},
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateServiceRequest {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub starting_price: Option<f64>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl From<CreateServiceRequest> for CreateOfferingData {
    fn from(req: CreateServiceRequest) -> Self {
        CreateOfferingData {
            title: req.title,
            slug: req.slug,
            description: req.description,
            icon: req.icon,
            features: req.features,
            starting_price: req.starting_price,
            display_order: req.display_order,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchServiceRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(default)]
    pub features: PatchField<Vec<String>>,
    #[serde(default)]
    pub starting_price: PatchField<f64>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
    #[serde(default)]
    pub is_active: PatchField<bool>,
}

impl From<PatchServiceRequest> for PatchOfferingData {
    fn from(req: PatchServiceRequest) -> Self {
        PatchOfferingData {
            title: req.title,
            description: req.description,
            icon: req.icon,
            features: req.features,
            starting_price: req.starting_price,
            display_order: req.display_order,
            is_active: req.is_active,
        }
    }
}

#[post("/api/admin/services")]
pub async fn create_service_handler(
    _admin: AdminUser,
    req: web::Json<CreateServiceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateOfferingCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.service.create.execute(command).await {
        Ok(offering) => ApiResponse::created(offering),
        Err(CreateOfferingError::SlugAlreadyExists) => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            "A service with this slug already exists",
        ),
        Err(CreateOfferingError::RepositoryError(e)) => {
            error!("Failed to create service: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/services")]
pub async fn list_all_services_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.list_all.execute().await {
        Ok(services) => ApiResponse::success(services),
        Err(ListOfferingsError::QueryFailed(e)) => {
            error!("Failed to list services: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/services/{service_id}")]
pub async fn patch_service_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchServiceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let service_id = path.into_inner();

    let command = match PatchOfferingCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.service.patch.execute(service_id, command).await {
        Ok(offering) => ApiResponse::success(offering),
        Err(err) => map_patch_error(service_id, err),
    }
}

fn map_patch_error(service_id: Uuid, err: PatchOfferingError) -> HttpResponse {
    match err {
        PatchOfferingError::NotFound => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        PatchOfferingError::RepositoryError(e) => {
            error!("Failed to patch service {}: {}", service_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/services/{service_id}")]
pub async fn delete_service_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let service_id = path.into_inner();

    match data.service.delete.execute(service_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteOfferingError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(DeleteOfferingError::RepositoryError(e)) => {
            error!("Failed to delete service {}: {}", service_id, e);
            ApiResponse::internal_error()
        }
    }
}
