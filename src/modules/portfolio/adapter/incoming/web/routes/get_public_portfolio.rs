use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a portfolio entry by slug
#[utoipa::path(
    get,
    path = "/api/portfolio/{slug}",
    tag = "portfolio",
    params(("slug" = String, Path, description = "Portfolio slug")),
    responses(
        (status = 200, description = "Portfolio entry", body = inline(SuccessResponse<PortfolioResult>)),
        (status = 404, description = "Unknown slug", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/{slug}")]
pub async fn get_public_portfolio_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.portfolio.get_public_single.execute(&slug).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        Err(GetPortfolioError::QueryFailed(msg)) => {
            error!("Failed to load portfolio {}: {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}
