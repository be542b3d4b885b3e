use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::upload::application::domain::entities::UploadFolder;
use crate::modules::upload::application::ports::incoming::use_cases::{
    CreateUploadUrlCommand, CreateUploadUrlError, UploadUrlCommandError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUploadUrlRequest {
    pub file_name: String,
    pub mime_type: String,
    pub file_size_bytes: u64,
    pub folder: UploadFolder,
}

#[post("/api/upload")]
pub async fn create_upload_url_handler(
    admin: AdminUser,
    req: web::Json<CreateUploadUrlRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateUploadUrlCommand::new(
        req.folder,
        req.file_name,
        req.mime_type,
        req.file_size_bytes,
        &data.upload.policy,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.upload.create_upload_url.execute(command).await {
        Ok(ticket) => {
            tracing::info!(admin = %admin.user_id, object = %ticket.object_name, "Upload URL issued");
            ApiResponse::created(ticket)
        }
        Err(CreateUploadUrlError::StorageError(e)) => {
            error!("Storage error creating upload URL: {}", e);
            ApiResponse::error(
                StatusCode::BAD_GATEWAY,
                "STORAGE_ERROR",
                "Failed to generate upload URL",
            )
        }
    }
}

fn map_command_error(e: UploadUrlCommandError) -> HttpResponse {
    match e {
        UploadUrlCommandError::MissingField(field) => {
            ApiResponse::bad_request("FIELD_REQUIRED", &format!("Missing field: {}", field))
        }
        UploadUrlCommandError::InvalidFileName => {
            ApiResponse::bad_request("INVALID_FILE_NAME", "Invalid file name")
        }
        e @ UploadUrlCommandError::FileTooLarge { .. } => {
            ApiResponse::bad_request("FILE_TOO_LARGE", &e.to_string())
        }
        e @ UploadUrlCommandError::InvalidMimeType(_) => {
            ApiResponse::bad_request("INVALID_MIME_TYPE", &e.to_string())
        }
        e @ UploadUrlCommandError::InvalidExtension(_) => {
            ApiResponse::bad_request("INVALID_EXTENSION", &e.to_string())
        }
        e @ UploadUrlCommandError::MimeExtensionMismatch { .. } => {
            ApiResponse::bad_request("MIME_EXTENSION_MISMATCH", &e.to_string())
        }
    }
}
