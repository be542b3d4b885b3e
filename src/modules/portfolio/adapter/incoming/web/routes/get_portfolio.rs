use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/portfolio/{portfolio_id}")]
pub async fn get_portfolio_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.get_single.execute(portfolio_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        Err(GetPortfolioError::QueryFailed(msg)) => {
            error!("Failed to load portfolio {}: {}", portfolio_id, msg);
            ApiResponse::internal_error()
        }
    }
}
