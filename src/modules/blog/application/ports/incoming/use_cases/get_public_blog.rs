use async_trait::async_trait;

use super::get_blog::GetBlogError;
use crate::modules::blog::application::ports::outgoing::blog_query::BlogView;

/// Drafts are reported as `NotFound`.
#[async_trait]
pub trait GetPublicBlogUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<BlogView, GetBlogError>;
}
