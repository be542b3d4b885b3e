use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogCommand, CreateBlogError,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::CreateBlogData;
use crate::shared::api::ApiResponse;
use crate::AppState;

const FALLBACK_AUTHOR: &str = "Admin";

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Defaults to the signed-in admin
    pub author: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl CreateBlogRequest {
    fn into_data(self, admin: &AdminUser) -> CreateBlogData {
        let author = self
            .author
            .filter(|a| !a.trim().is_empty())
            .or_else(|| admin.email.clone())
            .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());

        CreateBlogData {
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            cover_image: self.cover_image,
            tags: self.tags,
            author,
            is_published: self.is_published,
        }
    }
}

#[post("/api/admin/blog")]
pub async fn create_blog_handler(
    admin: AdminUser,
    req: web::Json<CreateBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateBlogCommand::new(req.into_inner().into_data(&admin)) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.blog.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_create_error(err),
    }
}

fn map_create_error(err: CreateBlogError) -> HttpResponse {
    match err {
        CreateBlogError::SlugAlreadyExists => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Blog slug already exists")
        }
        CreateBlogError::RepositoryError(e) => {
            error!("Repository error creating blog post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
