use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogError, GetPublicBlogUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_query::{BlogQuery, BlogView};

pub struct GetPublicBlogService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetPublicBlogService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicBlogUseCase for GetPublicBlogService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<BlogView, GetBlogError> {
        let slug = slug.trim().to_lowercase();

        if slug.is_empty() {
            return Err(GetBlogError::NotFound);
        }

        let view = self.query.get_by_slug(&slug).await?;

        if !view.is_published {
            return Err(GetBlogError::NotFound);
        }

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::application::ports::outgoing::blog_query::BlogQueryError;
    use crate::modules::blog::application::service::test_support::{sample_blog, MockBlogQuery};

    #[tokio::test]
    async fn published_post_is_visible() {
        let post = sample_blog(true);
        let service = GetPublicBlogService::new(MockBlogQuery::single(Ok(post.clone())));
        assert_eq!(service.execute("Hello-Rust").await.unwrap(), post);
    }

    #[tokio::test]
    async fn draft_is_hidden() {
        let service = GetPublicBlogService::new(MockBlogQuery::single(Ok(sample_blog(false))));
        assert_eq!(
            service.execute("hello-rust").await.unwrap_err(),
            GetBlogError::NotFound
        );
    }

    #[tokio::test]
    async fn query_failure_is_reported() {
        let service = GetPublicBlogService::new(MockBlogQuery::single(Err(
            BlogQueryError::DatabaseError("timeout".to_string()),
        )));
        assert_eq!(
            service.execute("hello-rust").await.unwrap_err(),
            GetBlogError::QueryFailed("timeout".to_string())
        );
    }
}
