use actix_web::{delete, get, patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::contact::application::use_cases::{
    delete_contact::DeleteContactError, list_contacts::ListContactsError,
    mark_contact_read::MarkContactReadError,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListContactsQuery {
    #[serde(default)]
    pub unread_only: bool,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub is_read: bool,
}

#[get("/api/admin/contact")]
pub async fn list_contacts_handler(
    _admin: AdminUser,
    query: web::Query<ListContactsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.per_page);

    match data.contact.list.execute(query.unread_only, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListContactsError::QueryFailed(e)) => {
            error!("Failed to list contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/contact/{contact_id}/read")]
pub async fn mark_contact_read_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<MarkReadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    match data.contact.mark_read.execute(contact_id, req.is_read).await {
        Ok(contact) => ApiResponse::success(contact),
        Err(MarkContactReadError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact message not found")
        }
        Err(MarkContactReadError::RepositoryError(e)) => {
            error!("Failed to update contact {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/contact/{contact_id}")]
pub async fn delete_contact_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    match data.contact.delete.execute(contact_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact message not found")
        }
        Err(DeleteContactError::RepositoryError(e)) => {
            error!("Failed to delete contact {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::contact::application::use_cases::delete_contact::DeleteContactUseCase;
    use crate::modules::contact::application::use_cases::list_contacts::ListContactsUseCase;
    use crate::modules::contact::application::use_cases::mark_contact_read::MarkContactReadUseCase;
    use crate::modules::contact::application::use_cases::test_support::sample_contact;
    use crate::modules::contact::domain::entities::Contact;
    use crate::shared::pagination::PageResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{admin_bearer, token_verifier_data};

    #[derive(Clone, Default)]
    struct MockList {
        seen: Arc<Mutex<Option<bool>>>,
    }

    #[async_trait]
    impl ListContactsUseCase for MockList {
        async fn execute(
            &self,
            unread_only: bool,
            page: PageRequest,
        ) -> Result<PageResult<Contact>, ListContactsError> {
            *self.seen.lock().unwrap() = Some(unread_only);
            Ok(PageResult::new(vec![sample_contact()], page, 1))
        }
    }

    struct MockMarkRead;

    #[async_trait]
    impl MarkContactReadUseCase for MockMarkRead {
        async fn execute(
            &self,
            _id: Uuid,
            is_read: bool,
        ) -> Result<Contact, MarkContactReadError> {
            let mut c = sample_contact();
            c.is_read = is_read;
            Ok(c)
        }
    }

    struct MockDelete(Result<(), DeleteContactError>);

    #[async_trait]
    impl DeleteContactUseCase for MockDelete {
        async fn execute(&self, _id: Uuid) -> Result<(), DeleteContactError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn test_list_unread_only() {
        let mock = MockList::default();
        let state = TestAppStateBuilder::default()
            .with_list_contacts(mock.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data())
                .service(list_contacts_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/contact?unread_only=true")
            .insert_header(admin_bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*mock.seen.lock().unwrap(), Some(true));
    }

    #[actix_web::test]
    async fn test_mark_read() {
        let state = TestAppStateBuilder::default()
            .with_mark_contact_read(MockMarkRead)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data())
                .service(mark_contact_read_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/contact/{}/read", Uuid::new_v4()))
            .insert_header(admin_bearer())
            .set_json(json!({ "is_read": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["is_read"], true);
    }

    #[actix_web::test]
    async fn test_delete_not_found() {
        let state = TestAppStateBuilder::default()
            .with_delete_contact(MockDelete(Err(DeleteContactError::NotFound)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data())
                .service(delete_contact_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/contact/{}", Uuid::new_v4()))
            .insert_header(admin_bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CONTACT_NOT_FOUND");
    }
}
