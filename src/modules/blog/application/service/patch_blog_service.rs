use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::blog::application::ports::incoming::use_cases::{
    PatchBlogCommand, PatchBlogError, PatchBlogUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogRepository, BlogRepositoryError, BlogResult,
};

pub struct PatchBlogService<R>
where
    R: BlogRepository,
{
    repository: R,
}

impl<R> PatchBlogService<R>
where
    R: BlogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchBlogUseCase for PatchBlogService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(
        &self,
        blog_id: Uuid,
        command: PatchBlogCommand,
    ) -> Result<BlogResult, PatchBlogError> {
        let data = command.into_data();
        let publish_change = data.is_published.as_value().copied();

        let updated = self
            .repository
            .patch_blog(blog_id, data)
            .await
            .map_err(|e| match e {
                BlogRepositoryError::NotFound => PatchBlogError::NotFound,
                other => PatchBlogError::RepositoryError(other.to_string()),
            })?;

        if let Some(published) = publish_change {
            info!(%blog_id, published, "Blog publish state changed");
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::application::ports::outgoing::blog_repository::PatchBlogData;
    use crate::modules::blog::application::service::test_support::{
        sample_blog, MockBlogRepository,
    };
    use crate::shared::patch::PatchField;

    #[tokio::test]
    async fn forwards_publish_flag() {
        let repo = MockBlogRepository::returning(Ok(sample_blog(true)));
        let service = PatchBlogService::new(repo.clone());

        let command = PatchBlogCommand::new(PatchBlogData {
            is_published: PatchField::Value(true),
            ..Default::default()
        })
        .unwrap();

        let result = service.execute(Uuid::new_v4(), command).await.unwrap();
        assert!(result.published_at.is_some());

        let seen = repo.last_patch.lock().unwrap().clone().unwrap();
        assert_eq!(seen.is_published, PatchField::Value(true));
        assert!(seen.title.is_unset());
    }

    #[tokio::test]
    async fn maps_not_found() {
        let service =
            PatchBlogService::new(MockBlogRepository::returning(Err(BlogRepositoryError::NotFound)));
        let command = PatchBlogCommand::new(PatchBlogData::default()).unwrap();

        assert_eq!(
            service.execute(Uuid::new_v4(), command).await.unwrap_err(),
            PatchBlogError::NotFound
        );
    }
}
