use async_trait::async_trait;

use crate::modules::personal_details::application::ports::outgoing::PersonalDetailsRepository;
use crate::modules::personal_details::domain::entities::PersonalDetails;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPersonalDetailsError {
    #[error("Personal details have not been set")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPersonalDetailsUseCase: Send + Sync {
    async fn execute(&self) -> Result<PersonalDetails, GetPersonalDetailsError>;
}

pub struct GetPersonalDetailsService<R>
where
    R: PersonalDetailsRepository,
{
    repository: R,
}

impl<R> GetPersonalDetailsService<R>
where
    R: PersonalDetailsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPersonalDetailsUseCase for GetPersonalDetailsService<R>
where
    R: PersonalDetailsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<PersonalDetails, GetPersonalDetailsError> {
        self.repository
            .get()
            .await
            .map_err(|e| GetPersonalDetailsError::QueryFailed(e.to_string()))?
            .ok_or(GetPersonalDetailsError::NotFound)
    }
}
