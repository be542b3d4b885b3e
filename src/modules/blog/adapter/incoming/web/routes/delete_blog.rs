use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::blog::application::ports::incoming::use_cases::DeleteBlogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/blog/{blog_id}")]
pub async fn delete_blog_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    match data.blog.delete.execute(blog_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found")
        }
        Err(DeleteBlogError::RepositoryError(e)) => {
            error!("Repository error deleting blog {}: {}", blog_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::modules::blog::application::ports::incoming::use_cases::DeleteBlogUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{admin_bearer, token_verifier_data};

    struct MockDeleteBlogUseCase(Result<(), DeleteBlogError>);

    #[async_trait]
    impl DeleteBlogUseCase for MockDeleteBlogUseCase {
        async fn execute(&self, _blog_id: Uuid) -> Result<(), DeleteBlogError> {
            self.0.clone()
        }
    }

    async fn call(result: Result<(), DeleteBlogError>, authorized: bool) -> StatusCode {
        let state = TestAppStateBuilder::default()
            .with_delete_blog(MockDeleteBlogUseCase(result))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data())
                .service(delete_blog_handler),
        )
        .await;

        let mut req = test::TestRequest::delete().uri(&format!("/api/admin/blog/{}", Uuid::new_v4()));
        if authorized {
            req = req.insert_header(admin_bearer());
        }

        test::call_service(&app, req.to_request()).await.status()
    }

    #[actix_web::test]
    async fn test_delete_blog_no_content() {
        assert_eq!(call(Ok(()), true).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_blog_not_found() {
        assert_eq!(
            call(Err(DeleteBlogError::NotFound), true).await,
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_delete_blog_requires_token() {
        assert_eq!(call(Ok(()), false).await, StatusCode::UNAUTHORIZED);
    }
}
