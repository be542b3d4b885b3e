// src/api/schemas.rs
//
// OpenAPI mirrors of the `ApiResponse` envelope. Handlers never build these;
// they exist so `utoipa` can describe what `ApiResponse` serializes.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. a field validation code or `BLOG_NOT_FOUND`
    #[schema(example = "FIELD_REQUIRED")]
    pub code: String,

    #[schema(example = "title is required")]
    pub message: String,
}
