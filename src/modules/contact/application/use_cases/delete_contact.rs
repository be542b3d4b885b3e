use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteContactUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactError>;
}

pub struct DeleteContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> DeleteContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteContactUseCase for DeleteContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ContactRepositoryError::NotFound => DeleteContactError::NotFound,
            other => DeleteContactError::RepositoryError(other.to_string()),
        })?;

        info!(contact_id = %id, "Contact message deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::use_cases::test_support::MockContactRepo;

    #[tokio::test]
    async fn maps_not_found() {
        let mut repo = MockContactRepo::new();
        repo.expect_delete()
            .returning(|_| Err(ContactRepositoryError::NotFound));

        assert_eq!(
            DeleteContactService::new(repo)
                .execute(Uuid::new_v4())
                .await
                .unwrap_err(),
            DeleteContactError::NotFound
        );
    }
}
