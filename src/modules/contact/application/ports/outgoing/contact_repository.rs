use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::domain::entities::{Contact, NewContact};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, data: NewContact) -> Result<Contact, ContactRepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<PageResult<Contact>, ContactRepositoryError>;

    async fn set_read(&self, id: Uuid, is_read: bool) -> Result<Contact, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
