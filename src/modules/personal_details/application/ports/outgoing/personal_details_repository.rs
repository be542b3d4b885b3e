use async_trait::async_trait;

use crate::modules::personal_details::domain::entities::{PersonalDetails, PersonalDetailsData};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PersonalDetailsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait PersonalDetailsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<PersonalDetails>, PersonalDetailsRepositoryError>;

    async fn upsert(
        &self,
        data: PersonalDetailsData,
    ) -> Result<PersonalDetails, PersonalDetailsRepositoryError>;
}
