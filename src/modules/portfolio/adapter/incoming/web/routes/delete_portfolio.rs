use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::DeletePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/portfolio/{portfolio_id}")]
pub async fn delete_portfolio_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.delete.execute(portfolio_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeletePortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        Err(DeletePortfolioError::RepositoryError(e)) => {
            error!("Repository error deleting portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}
