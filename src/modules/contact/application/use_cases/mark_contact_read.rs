use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use crate::modules::contact::domain::entities::Contact;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkContactReadError {
    #[error("Contact not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkContactReadUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, is_read: bool) -> Result<Contact, MarkContactReadError>;
}

pub struct MarkContactReadService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> MarkContactReadService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkContactReadUseCase for MarkContactReadService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, is_read: bool) -> Result<Contact, MarkContactReadError> {
        self.repository
            .set_read(id, is_read)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => MarkContactReadError::NotFound,
                other => MarkContactReadError::RepositoryError(other.to_string()),
            })
    }
}
