use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::use_cases::submit_contact::{
    SubmitContactCommand, SubmitContactData, SubmitContactError,
};
use crate::modules::contact::domain::entities::Contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl From<SubmitContactRequest> for SubmitContactData {
    fn from(req: SubmitContactRequest) -> Self {
        SubmitContactData {
            name: req.name,
            email: req.email,
            phone: req.phone,
            subject: req.subject,
            message: req.message,
        }
    }
}

/// Submit a contact message
///
/// The site owner is notified by email; a failed notification does not fail the request.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<Contact>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<SubmitContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SubmitContactCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.contact.submit.execute(command).await {
        Ok(contact) => ApiResponse::created(contact),
        Err(SubmitContactError::RepositoryError(e)) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
