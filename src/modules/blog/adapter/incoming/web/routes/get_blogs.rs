use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::blog::application::domain::entities::BlogStatus;
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogsError;
use crate::modules::blog::application::ports::outgoing::blog_query::{BlogCard, BlogListFilter};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetBlogsQuery {
    /// Case-insensitive match on title, excerpt or content
    pub search: Option<String>,
    pub tag: Option<String>,
    /// Admin listing only; the public listing is always `published`
    #[param(inline)]
    pub status: Option<BlogStatus>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl GetBlogsQuery {
    fn split(self) -> (BlogListFilter, PageRequest) {
        let filter = BlogListFilter {
            search: self.search,
            tag: self.tag,
            status: self.status,
        };

        (filter, PageRequest::new(self.page, self.per_page))
    }
}

/// List published blog posts
///
/// Most recently published first.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    params(GetBlogsQuery),
    responses(
        (status = 200, description = "Page of blog cards", body = inline(SuccessResponse<PageResult<BlogCard>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/blog")]
pub async fn get_public_blogs_handler(
    query: web::Query<GetBlogsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (mut filter, page) = query.into_inner().split();
    filter.status = Some(BlogStatus::Published);

    list(filter, page, &data).await
}

#[get("/api/admin/blog")]
pub async fn get_admin_blogs_handler(
    _admin: AdminUser,
    query: web::Query<GetBlogsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().split();
    list(filter, page, &data).await
}

async fn list(filter: BlogListFilter, page: PageRequest, data: &web::Data<AppState>) -> HttpResponse {
    match data.blog.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(GetBlogsError::QueryFailed(msg)) => {
            error!("Failed to list blog posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
