use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::ai::application::use_cases::search_web::{SearchWebCommand, SearchWebError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: Option<u32>,
}

#[post("/api/ai/search")]
pub async fn search_handler(
    _admin: AdminUser,
    req: web::Json<SearchRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SearchWebCommand::new(&req.query, req.max_results) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.ai.search.execute(command).await {
        Ok(results) => ApiResponse::success(results),
        Err(SearchWebError::ProviderFailed(e)) => {
            error!("Web search failed: {}", e);
            ApiResponse::bad_gateway("SEARCH_PROVIDER_ERROR", "Search provider request failed")
        }
    }
}
