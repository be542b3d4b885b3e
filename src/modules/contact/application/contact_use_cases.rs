use std::sync::Arc;

use crate::modules::contact::application::use_cases::{
    delete_contact::DeleteContactUseCase, list_contacts::ListContactsUseCase,
    mark_contact_read::MarkContactReadUseCase, submit_contact::SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactsUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkContactReadUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactUseCase + Send + Sync>,
}
