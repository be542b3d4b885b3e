use actix_web::{delete, get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::seo::application::use_cases::{
    delete_seo::DeleteSeoError,
    get_seo::GetSeoError,
    list_seo::ListSeoError,
    upsert_seo::{UpsertSeoCommand, UpsertSeoError},
};
use crate::modules::seo::domain::entities::{SeoData, SeoEntry};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SeoRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

impl From<SeoRequest> for SeoData {
    fn from(req: SeoRequest) -> Self {
        SeoData {
            title: req.title,
            description: req.description,
            keywords: req.keywords,
            og_image: req.og_image,
            canonical_url: req.canonical_url,
        }
    }
}

/// SEO metadata for one page
#[utoipa::path(
    get,
    path = "/api/seo/{page}",
    tag = "seo",
    params(("page" = String, Path, description = "Page key, e.g. home")),
    responses(
        (status = 200, description = "SEO entry", body = inline(SuccessResponse<SeoEntry>)),
        (status = 404, description = "No entry for this page", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/seo/{page}")]
pub async fn get_seo_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let page = path.into_inner();

    match data.seo.get.execute(&page).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(GetSeoError::NotFound) => {
            ApiResponse::not_found("SEO_NOT_FOUND", "No SEO entry for this page")
        }
        Err(GetSeoError::QueryFailed(e)) => {
            error!("Failed to load SEO entry {}: {}", page, e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/seo")]
pub async fn list_seo_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.seo.list.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(ListSeoError::QueryFailed(e)) => {
            error!("Failed to list SEO entries: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/seo/{page}")]
pub async fn upsert_seo_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<SeoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpsertSeoCommand::new(&path.into_inner(), req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.seo.upsert.execute(command).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(UpsertSeoError::RepositoryError(e)) => {
            error!("Failed to save SEO entry: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/seo/{page}")]
pub async fn delete_seo_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = path.into_inner();

    match data.seo.delete.execute(&page).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteSeoError::NotFound) => {
            ApiResponse::not_found("SEO_NOT_FOUND", "No SEO entry for this page")
        }
        Err(DeleteSeoError::RepositoryError(e)) => {
            error!("Failed to delete SEO entry {}: {}", page, e);
            ApiResponse::internal_error()
        }
    }
}
