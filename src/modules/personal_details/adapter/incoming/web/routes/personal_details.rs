use actix_web::{get, put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::personal_details::application::use_cases::get_personal_details::GetPersonalDetailsError;
use crate::modules::personal_details::application::use_cases::upsert_personal_details::{
    UpsertPersonalDetailsCommand, UpsertPersonalDetailsError,
};
use crate::modules::personal_details::domain::entities::{
    PersonalDetails, PersonalDetailsData, SocialLink,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PersonalDetailsRequest {
    pub full_name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl From<PersonalDetailsRequest> for PersonalDetailsData {
    fn from(req: PersonalDetailsRequest) -> Self {
        PersonalDetailsData {
            full_name: req.full_name,
            headline: req.headline,
            bio: req.bio,
            email: req.email,
            phone: req.phone,
            location: req.location,
            avatar_url: req.avatar_url,
            resume_url: req.resume_url,
            social_links: req.social_links,
            skills: req.skills,
        }
    }
}

/// Get the site owner's personal details
#[utoipa::path(
    get,
    path = "/api/personal-details",
    tag = "personal-details",
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<PersonalDetails>)),
        (status = 404, description = "Not set yet", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/personal-details")]
pub async fn get_personal_details_handler(data: web::Data<AppState>) -> impl Responder {
    match data.personal_details.get.execute().await {
        Ok(details) => ApiResponse::success(details),
        Err(GetPersonalDetailsError::NotFound) => ApiResponse::not_found(
            "PERSONAL_DETAILS_NOT_FOUND",
            "Personal details have not been set",
        ),
        Err(GetPersonalDetailsError::QueryFailed(e)) => {
            error!("Failed to load personal details: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/personal-details")]
pub async fn upsert_personal_details_handler(
    _admin: AdminUser,
    req: web::Json<PersonalDetailsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpsertPersonalDetailsCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::invalid(&e),
    };

    match data.personal_details.upsert.execute(command).await {
        Ok(details) => ApiResponse::success(details),
        Err(UpsertPersonalDetailsError::RepositoryError(e)) => {
            error!("Failed to save personal details: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};

    use crate::modules::personal_details::application::use_cases::get_personal_details::GetPersonalDetailsUseCase;
    use crate::modules::personal_details::application::use_cases::upsert_personal_details::UpsertPersonalDetailsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{admin_bearer, token_verifier_data};

    fn details() -> PersonalDetails {
        PersonalDetails {
            full_name: "Jane Doe".to_string(),
            headline: "Rust engineer".to_string(),
            bio: "Builds backends.".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            location: None,
            avatar_url: None,
            resume_url: None,
            social_links: vec![],
            skills: vec!["Rust".to_string()],
            updated_at: Utc::now(),
        }
    }

    struct MockGet(Result<PersonalDetails, GetPersonalDetailsError>);

    #[async_trait]
    impl GetPersonalDetailsUseCase for MockGet {
        async fn execute(&self) -> Result<PersonalDetails, GetPersonalDetailsError> {
            self.0.clone()
        }
    }

    struct MockUpsert;

    #[async_trait]
    impl UpsertPersonalDetailsUseCase for MockUpsert {
        async fn execute(
            &self,
            _command: UpsertPersonalDetailsCommand,
        ) -> Result<PersonalDetails, UpsertPersonalDetailsError> {
            Ok(details())
        }
    }

    #[actix_web::test]
    async fn test_get_before_first_save_is_404() {
        let state = TestAppStateBuilder::default()
            .with_get_personal_details(MockGet(Err(GetPersonalDetailsError::NotFound)))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_personal_details_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/personal-details").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PERSONAL_DETAILS_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_returns_profile() {
        let state = TestAppStateBuilder::default()
            .with_get_personal_details(MockGet(Ok(details())))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_personal_details_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/personal-details").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["full_name"], "Jane Doe");
    }

    #[actix_web::test]
    async fn test_upsert_validates_email() {
        let state = TestAppStateBuilder::default()
            .with_upsert_personal_details(MockUpsert)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data())
                .service(upsert_personal_details_handler),
        )
        .await;

        let mut body = json!({
            "full_name": "Jane Doe",
            "headline": "Rust engineer",
            "bio": "Builds backends.",
            "email": "jane@example.com"
        });

        let req = test::TestRequest::put()
            .uri("/api/admin/personal-details")
            .insert_header(admin_bearer())
            .set_json(&body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        body["email"] = Value::from("broken");
        let req = test::TestRequest::put()
            .uri("/api/admin/personal-details")
            .insert_header(admin_bearer())
            .set_json(&body)
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }
}
