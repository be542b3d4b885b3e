use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::ad::application::use_cases::list_active_ads::ListActiveAdsError;
use crate::modules::ad::domain::entities::{Ad, AdPlacement};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ActiveAdsQuery {
    /// header, sidebar, footer or inline
    #[param(inline)]
    pub placement: Option<AdPlacement>,
}

/// Ads that are enabled and inside their schedule right now
#[utoipa::path(
    get,
    path = "/api/ads",
    tag = "ads",
    params(ActiveAdsQuery),
    responses(
        (status = 200, description = "Live ads", body = inline(SuccessResponse<Vec<Ad>>)),
        (status = 400, description = "Unknown placement", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/ads")]
pub async fn list_active_ads_handler(
    query: web::Query<ActiveAdsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.ad.list_active.execute(query.into_inner().placement).await {
        Ok(ads) => ApiResponse::success(ads),
        Err(ListActiveAdsError::QueryFailed(e)) => {
            error!("Failed to load live ads: {}", e);
            ApiResponse::internal_error()
        }
    }
}
