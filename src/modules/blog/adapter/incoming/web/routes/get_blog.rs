use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin view by id, drafts included.
#[get("/api/admin/blog/{blog_id}")]
pub async fn get_blog_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    match data.blog.get_single.execute(blog_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found")
        }
        Err(GetBlogError::QueryFailed(msg)) => {
            error!("Failed to load blog {}: {}", blog_id, msg);
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

    use crate::modules::blog::application::ports::incoming::use_cases::GetBlogUseCase;
    use crate::modules::blog::application::ports::outgoing::blog_query::BlogView;
    use crate::modules::blog::application::service::test_support::sample_blog;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{admin_bearer, token_verifier_data};

    struct MockGetBlog(Result<BlogView, GetBlogError>);

    #[async_trait]
    impl GetBlogUseCase for MockGetBlog {
        async fn execute(&self, _blog_id: Uuid) -> Result<BlogView, GetBlogError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn test_admin_gets_draft() {
        let state = TestAppStateBuilder::default()
            .with_get_blog(MockGetBlog(Ok(sample_blog(false))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data())
                .service(get_blog_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/blog/{}", Uuid::new_v4()))
            .insert_header(admin_bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["is_published"], false);
        assert!(body["data"]["published_at"].is_null());
    }
}
