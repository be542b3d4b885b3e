use actix_web::{patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    PatchPortfolioCommand, PatchPortfolioError,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PatchPortfolioData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PatchPortfolioRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub technologies: PatchField<Vec<String>>,
    #[serde(default)]
    pub images: PatchField<Vec<String>>,
    #[serde(default)]
    pub thumbnail_url: PatchField<String>,
    #[serde(default)]
    pub live_url: PatchField<String>,
    #[serde(default)]
    pub repo_url: PatchField<String>,
    #[serde(default)]
    pub is_featured: PatchField<bool>,
}

impl From<PatchPortfolioRequest> for PatchPortfolioData {
    fn from(req: PatchPortfolioRequest) -> Self {
        PatchPortfolioData {
            title: req.title,
            description: req.description,
            category: req.category,
            technologies: req.technologies,
            images: req.images,
            thumbnail_url: req.thumbnail_url,
            live_url: req.live_url,
            repo_url: req.repo_url,
            is_featured: req.is_featured,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[patch("/api/admin/portfolio/{portfolio_id}")]
pub async fn patch_portfolio_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchPortfolioRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    let command = match PatchPortfolioCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.portfolio.patch.execute(portfolio_id, command).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(err) => map_patch_error(portfolio_id, err),
    }
}

fn map_patch_error(portfolio_id: Uuid, err: PatchPortfolioError) -> HttpResponse {
    match err {
        PatchPortfolioError::NotFound => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        PatchPortfolioError::RepositoryError(e) => {
            error!("Repository error patching portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}
