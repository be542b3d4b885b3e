use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::ai::application::use_cases::generate_blog_draft::{
    GenerateBlogCommand, GenerateBlogData, GenerateBlogError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateBlogRequest {
    pub topic: String,
    pub tone: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub research: bool,
}

#[post("/api/ai/blog")]
pub async fn generate_blog_handler(
    _admin: AdminUser,
    req: web::Json<GenerateBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let result = match GenerateBlogCommand::new(GenerateBlogData {
        topic: req.topic,
        tone: req.tone,
        keywords: req.keywords,
        research: req.research,
    }) {
        Ok(command) => data.ai.generate_blog.execute(command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(draft) => ApiResponse::success(draft),
        Err(GenerateBlogError::EmptyTopic) => {
            ApiResponse::bad_request("EMPTY_TOPIC", "Topic must not be empty")
        }
        Err(GenerateBlogError::Invalid(e)) => ApiResponse::invalid(&e),
        Err(GenerateBlogError::SearchFailed(e)) => {
            error!("Research search failed: {}", e);
            ApiResponse::bad_gateway("SEARCH_PROVIDER_ERROR", "Search provider request failed")
        }
        Err(GenerateBlogError::ProviderFailed(e)) => {
            error!("AI provider failed: {}", e);
            ApiResponse::bad_gateway("AI_PROVIDER_ERROR", "AI provider request failed")
        }
        Err(GenerateBlogError::InvalidResponse(e)) => {
            error!("AI returned an unusable draft: {}", e);
            ApiResponse::bad_gateway("AI_INVALID_RESPONSE", "AI returned an unusable draft")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::ai::application::use_cases::generate_blog_draft::GenerateBlogDraftUseCase;
    use crate::modules::ai::domain::entities::BlogDraft;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{admin_bearer, token_verifier_data};

    struct MockGenerate(Result<BlogDraft, GenerateBlogError>);

    #[async_trait]
    impl GenerateBlogDraftUseCase for MockGenerate {
        async fn execute(&self, _command: GenerateBlogCommand) -> Result<BlogDraft, GenerateBlogError> {
            self.0.clone()
        }
    }

    async fn post(outcome: Result<BlogDraft, GenerateBlogError>, body: Value) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_generate_blog_draft(MockGenerate(outcome))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data())
                .service(generate_blog_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/ai/blog")
            .insert_header(admin_bearer())
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    fn draft() -> BlogDraft {
        BlogDraft {
            title: "T".into(),
            excerpt: "E".into(),
            content: "C".into(),
            tags: vec!["rust".into()],
        }
    }

    #[actix_web::test]
    async fn test_returns_draft() {
        let resp = post(Ok(draft()), json!({ "topic": "Rust", "research": true })).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "T");
        assert_eq!(body["data"]["tags"][0], "rust");
    }

    #[actix_web::test]
    async fn test_empty_topic() {
        let resp = post(Ok(draft()), json!({ "topic": "  " })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_TOPIC");
    }

    #[actix_web::test]
    async fn test_provider_errors_are_bad_gateway() {
        for (err, code) in [
            (GenerateBlogError::ProviderFailed("x".into()), "AI_PROVIDER_ERROR"),
            (GenerateBlogError::InvalidResponse("x".into()), "AI_INVALID_RESPONSE"),
            (GenerateBlogError::SearchFailed("x".into()), "SEARCH_PROVIDER_ERROR"),
        ] {
            let resp = post(Err(err), json!({ "topic": "Rust" })).await;
            assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], code);
        }
    }
}
