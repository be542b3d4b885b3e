use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_query::{BlogQueryError, BlogView};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetBlogError {
    #[error("Blog not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BlogQueryError> for GetBlogError {
    fn from(err: BlogQueryError) -> Self {
        match err {
            BlogQueryError::NotFound => GetBlogError::NotFound,
            BlogQueryError::DatabaseError(msg) | BlogQueryError::SerializationError(msg) => {
                GetBlogError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetBlogUseCase: Send + Sync {
    async fn execute(&self, blog_id: Uuid) -> Result<BlogView, GetBlogError>;
}
