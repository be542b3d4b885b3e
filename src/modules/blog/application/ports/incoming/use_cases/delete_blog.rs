use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteBlogError {
    #[error("Blog not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<BlogRepositoryError> for DeleteBlogError {
    fn from(err: BlogRepositoryError) -> Self {
        match err {
            BlogRepositoryError::NotFound => DeleteBlogError::NotFound,
            other => DeleteBlogError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteBlogUseCase: Send + Sync {
    async fn execute(&self, blog_id: Uuid) -> Result<(), DeleteBlogError>;
}
