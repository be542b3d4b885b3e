use actix_web::{patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::blog::application::ports::incoming::use_cases::{
    PatchBlogCommand, PatchBlogError,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::PatchBlogData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PatchBlogRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub excerpt: PatchField<String>,
    #[serde(default)]
    pub content: PatchField<String>,
    #[serde(default)]
    pub cover_image: PatchField<String>,
    #[serde(default)]
    pub tags: PatchField<Vec<String>>,
    #[serde(default)]
    pub author: PatchField<String>,
    #[serde(default)]
    pub is_published: PatchField<bool>,
}

impl From<PatchBlogRequest> for PatchBlogData {
    fn from(req: PatchBlogRequest) -> Self {
        PatchBlogData {
            title: req.title,
            excerpt: req.excerpt,
            content: req.content,
            cover_image: req.cover_image,
            tags: req.tags,
            author: req.author,
            is_published: req.is_published,
        }
    }
}

#[patch("/api/admin/blog/{blog_id}")]
pub async fn patch_blog_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    let command = match PatchBlogCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.blog.patch.execute(blog_id, command).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(err) => map_patch_error(blog_id, err),
    }
}

fn map_patch_error(blog_id: Uuid, err: PatchBlogError) -> HttpResponse {
    match err {
        PatchBlogError::NotFound => ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found"),
        PatchBlogError::RepositoryError(e) => {
            error!("Repository error patching blog {}: {}", blog_id, e);
            ApiResponse::internal_error()
        }
    }
}
