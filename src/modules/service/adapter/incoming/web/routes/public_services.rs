use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::service::application::use_cases::list_offerings::ListOfferingsError;
use crate::modules::service::domain::entities::ServiceOffering;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Active services in display order
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    responses(
        (status = 200, description = "Active services", body = inline(SuccessResponse<Vec<ServiceOffering>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/services")]
pub async fn list_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.service.list_active.execute().await {
        Ok(services) => ApiResponse::success(services),
        Err(ListOfferingsError::QueryFailed(e)) => {
            error!("Failed to list services: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::service::application::use_cases::list_offerings::ListOfferingsUseCase;
    use crate::modules::service::application::use_cases::test_support::sample_offering;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockList;

    #[async_trait]
    impl ListOfferingsUseCase for MockList {
        async fn execute(&self) -> Result<Vec<ServiceOffering>, ListOfferingsError> {
            Ok(vec![sample_offering("Audits", 1)])
        }
    }

    #[actix_web::test]
    async fn test_public_list_needs_no_token() {
        let state = TestAppStateBuilder::default()
            .with_list_active_services(MockList)
            .build();
        let app = test::init_service(App::new().app_data(state).service(list_services_handler))
            .await;

        let req = test::TestRequest::get().uri("/api/services").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["slug"], "audits");
    }
}
