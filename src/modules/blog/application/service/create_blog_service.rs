use async_trait::async_trait;
use tracing::info;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogCommand, CreateBlogError, CreateBlogUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogRepository, BlogRepositoryError, BlogResult,
};

pub struct CreateBlogService<R>
where
    R: BlogRepository,
{
    repository: R,
}

impl<R> CreateBlogService<R>
where
    R: BlogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateBlogUseCase for CreateBlogService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, command: CreateBlogCommand) -> Result<BlogResult, CreateBlogError> {
        let created = self
            .repository
            .create_blog(command.into_data())
            .await
            .map_err(|e| match e {
                BlogRepositoryError::SlugAlreadyExists => CreateBlogError::SlugAlreadyExists,
                other => CreateBlogError::RepositoryError(other.to_string()),
            })?;

        info!(
            blog_id = %created.id,
            slug = %created.slug,
            published = created.is_published,
            "Blog post created"
        );
        Ok(created)
    }
}
