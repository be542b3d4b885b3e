use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::blog_query::{
    BlogCard, BlogListFilter, BlogQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetBlogsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BlogQueryError> for GetBlogsError {
    fn from(err: BlogQueryError) -> Self {
        GetBlogsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetBlogsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: BlogListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BlogCard>, GetBlogsError>;
}
