use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogError;
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a published blog post by slug
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "blog",
    params(("slug" = String, Path, description = "Blog post slug")),
    responses(
        (status = 200, description = "Published blog post", body = inline(SuccessResponse<BlogResult>)),
        (status = 404, description = "Unknown slug or draft", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_public_blog_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blog.get_public_single.execute(&slug).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found")
        }
        Err(GetBlogError::QueryFailed(msg)) => {
            error!("Failed to load blog {}: {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::blog::application::ports::incoming::use_cases::GetPublicBlogUseCase;
    use crate::modules::blog::application::ports::outgoing::blog_query::BlogView;
    use crate::modules::blog::application::service::test_support::sample_blog;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockGetPublicBlog(Result<BlogView, GetBlogError>);

    #[async_trait]
    impl GetPublicBlogUseCase for MockGetPublicBlog {
        async fn execute(&self, _slug: &str) -> Result<BlogView, GetBlogError> {
            self.0.clone()
        }
    }

    async fn call(result: Result<BlogView, GetBlogError>) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_get_public_blog(MockGetPublicBlog(result))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_public_blog_handler)).await;

        let req = test::TestRequest::get().uri("/api/blog/hello-rust").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_get_public_blog_success() {
        let (status, body) = call(Ok(sample_blog(true))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["content"], "Ownership is the core idea.");
    }

    #[actix_web::test]
    async fn test_get_public_blog_not_found() {
        let (status, body) = call(Err(GetBlogError::NotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "BLOG_NOT_FOUND");
    }
}
