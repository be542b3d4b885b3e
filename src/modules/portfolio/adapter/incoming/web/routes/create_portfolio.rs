use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioCommand, CreatePortfolioError,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::CreatePortfolioData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct CreatePortfolioRequest {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl From<CreatePortfolioRequest> for CreatePortfolioData {
    fn from(req: CreatePortfolioRequest) -> Self {
        CreatePortfolioData {
            title: req.title,
            slug: req.slug,
            description: req.description,
            category: req.category,
            technologies: req.technologies,
            images: req.images,
            thumbnail_url: req.thumbnail_url,
            live_url: req.live_url,
            repo_url: req.repo_url,
            is_featured: req.is_featured,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/portfolio")]
pub async fn create_portfolio_handler(
    _admin: AdminUser,
    req: web::Json<CreatePortfolioRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreatePortfolioCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.portfolio.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_create_error(err),
    }
}

fn map_create_error(err: CreatePortfolioError) -> HttpResponse {
    match err {
        CreatePortfolioError::SlugAlreadyExists => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Portfolio slug already exists")
        }
        CreatePortfolioError::RepositoryError(e) => {
            error!("Repository error creating portfolio: {}", e);
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

    use crate::modules::portfolio::application::ports::incoming::use_cases::CreatePortfolioUseCase;
    use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioResult;
    use crate::modules::portfolio::application::service::test_support::sample_portfolio;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{
        admin_bearer, token_for, token_verifier_data,
    };

    #[derive(Clone)]
    struct MockCreatePortfolioUseCase {
        result: Result<PortfolioResult, CreatePortfolioError>,
    }

    #[async_trait]
    impl CreatePortfolioUseCase for MockCreatePortfolioUseCase {
        async fn execute(
            &self,
            _command: CreatePortfolioCommand,
        ) -> Result<PortfolioResult, CreatePortfolioError> {
            self.result.clone()
        }
    }

    fn base_request() -> Value {
        serde_json::json!({
            "title": "Shop Rewrite",
            "slug": "shop-rewrite",
            "description": "A storefront",
            "technologies": ["Rust"],
            "live_url": "https://shop.example.com"
        })
    }

    async fn call(
        result: Result<PortfolioResult, CreatePortfolioError>,
        body: Value,
        auth: (&'static str, String),
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_create_portfolio(MockCreatePortfolioUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data())
                .service(create_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/portfolio")
            .insert_header(auth)
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_create_portfolio_success() {
        let (status, body) = call(Ok(sample_portfolio()), base_request(), admin_bearer()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["slug"], "shop-rewrite");
    }

    #[actix_web::test]
    async fn test_create_portfolio_slug_conflict() {
        let (status, body) = call(
            Err(CreatePortfolioError::SlugAlreadyExists),
            base_request(),
            admin_bearer(),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "SLUG_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_create_portfolio_invalid_slug_is_400() {
        let mut request = base_request();
        request["slug"] = Value::from("Not A Slug");

        let (status, body) = call(Ok(sample_portfolio()), request, admin_bearer()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_SLUG");
    }

    #[actix_web::test]
    async fn test_create_portfolio_repository_error() {
        let (status, body) = call(
            Err(CreatePortfolioError::RepositoryError("db down".to_string())),
            base_request(),
            admin_bearer(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_create_portfolio_requires_admin() {
        let token = token_for(Some("visitor@example.com"), None);
        let (status, body) = call(
            Ok(sample_portfolio()),
            base_request(),
            ("Authorization", format!("Bearer {token}")),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "NOT_ADMIN");
    }
}
