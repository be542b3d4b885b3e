use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::ports::incoming::use_cases::{GetBlogError, GetBlogUseCase};
use crate::modules::blog::application::ports::outgoing::blog_query::{BlogQuery, BlogView};

pub struct GetBlogService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetBlogService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogUseCase for GetBlogService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, blog_id: Uuid) -> Result<BlogView, GetBlogError> {
        self.query.get_by_id(blog_id).await.map_err(GetBlogError::from)
    }
}
