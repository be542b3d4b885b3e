use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::marketing_mail::application::use_cases::send_campaign::SendCampaignError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Waits for the fan-out and answers with a report listing failed recipients.
/// Delivery keeps running if the client disconnects first.
#[post("/api/admin/marketing-mail/{campaign_id}/send")]
pub async fn send_campaign_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let campaign_id = path.into_inner();
    tracing::info!(campaign_id = %campaign_id, admin = %admin.user_id, "Campaign send requested");

    match data.marketing_mail.send.execute(campaign_id).await {
        Ok(report) => ApiResponse::success(report),
        Err(SendCampaignError::NotFound) => {
            ApiResponse::not_found("CAMPAIGN_NOT_FOUND", "Campaign not found")
        }
        Err(SendCampaignError::NotSendable(status)) => ApiResponse::conflict(
            "CAMPAIGN_ALREADY_SENT",
            &format!("Campaign is {status} and cannot be sent again"),
        ),
        Err(SendCampaignError::RepositoryError(e)) => {
            error!("Failed to send campaign {}: {}", campaign_id, e);
            ApiResponse::internal_error()
        }
    }
}
