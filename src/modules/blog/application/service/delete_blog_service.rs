use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::blog::application::ports::incoming::use_cases::{
    DeleteBlogError, DeleteBlogUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRepository;

pub struct DeleteBlogService<R>
where
    R: BlogRepository,
{
    repository: R,
}

impl<R> DeleteBlogService<R>
where
    R: BlogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteBlogUseCase for DeleteBlogService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, blog_id: Uuid) -> Result<(), DeleteBlogError> {
        self.repository.delete_blog(blog_id).await?;
        info!(%blog_id, "Blog post deleted");
        Ok(())
    }
}
