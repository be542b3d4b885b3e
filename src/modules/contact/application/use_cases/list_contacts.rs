use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::contact::domain::entities::Contact;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListContactsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListContactsUseCase: Send + Sync {
    async fn execute(
        &self,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<PageResult<Contact>, ListContactsError>;
}

pub struct ListContactsService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> ListContactsService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactsUseCase for ListContactsService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<PageResult<Contact>, ListContactsError> {
        self.repository
            .list(unread_only, page)
            .await
            .map_err(|e| ListContactsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::use_cases::test_support::{
        sample_contact, MockContactRepo,
    };
    use mockall::predicate::eq;

    #[tokio::test]
    async fn forwards_unread_filter() {
        let mut repo = MockContactRepo::new();
        repo.expect_list()
            .with(eq(true), eq(PageRequest::default()))
            .times(1)
            .returning(|_, page| Ok(PageResult::new(vec![sample_contact()], page, 1)));

        let result = ListContactsService::new(repo)
            .execute(true, PageRequest::default())
            .await
            .unwrap();

        assert_eq!(result.total, 1);
    }
}
