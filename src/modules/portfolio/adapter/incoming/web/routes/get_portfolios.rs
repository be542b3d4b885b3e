use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfoliosError;
use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioCard, PortfolioListFilter,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetPortfoliosQuery {
    /// Case-insensitive match on title or description
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<GetPortfoliosQuery> for (PortfolioListFilter, PageRequest) {
    fn from(q: GetPortfoliosQuery) -> Self {
        let filter = PortfolioListFilter {
            search: q.search,
            featured: q.featured,
            category: q.category.filter(|c| !c.trim().is_empty()),
        };

        (filter, PageRequest::new(q.page, q.per_page))
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// List portfolio entries
///
/// Newest first, paginated.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    params(GetPortfoliosQuery),
    responses(
        (status = 200, description = "Page of portfolio cards", body = inline(SuccessResponse<PageResult<PortfolioCard>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_public_portfolios_handler(
    query: web::Query<GetPortfoliosQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(query.into_inner(), &data).await
}

#[get("/api/admin/portfolio")]
pub async fn get_admin_portfolios_handler(
    _admin: AdminUser,
    query: web::Query<GetPortfoliosQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(query.into_inner(), &data).await
}

async fn list(query: GetPortfoliosQuery, data: &web::Data<AppState>) -> HttpResponse {
    let (filter, page) = query.into();

    match data.portfolio.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(GetPortfoliosError::QueryFailed(msg)) => {
            error!("Failed to list portfolios: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
