use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{
    derive_excerpt, MAX_AUTHOR_LEN, MAX_CONTENT_LEN, MAX_EXCERPT_LEN, MAX_TAGS, MAX_TAG_LEN,
    MAX_TITLE_LEN,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogResult, CreateBlogData,
};
use crate::shared::validation::{self, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateBlogCommand {
    data: CreateBlogData,
}

impl CreateBlogCommand {
    /// A blank excerpt is derived from the content.
    pub fn new(raw: CreateBlogData) -> Result<Self, ValidationError> {
        let content = validation::required_text("content", &raw.content, MAX_CONTENT_LEN)?;

        let excerpt = if raw.excerpt.trim().is_empty() {
            derive_excerpt(&content)
        } else {
            validation::required_text("excerpt", &raw.excerpt, MAX_EXCERPT_LEN)?
        };

        let data = CreateBlogData {
            title: validation::required_text("title", &raw.title, MAX_TITLE_LEN)?,
            slug: validation::slug("slug", &raw.slug)?,
            excerpt,
            content,
            cover_image: validation::optional_http_url("cover_image", raw.cover_image)?,
            tags: validation::tags("tags", raw.tags, MAX_TAGS, MAX_TAG_LEN)?,
            author: validation::required_text("author", &raw.author, MAX_AUTHOR_LEN)?,
            is_published: raw.is_published,
        };

        Ok(Self { data })
    }

    pub fn into_data(self) -> CreateBlogData {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateBlogError {
    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateBlogUseCase: Send + Sync {
    async fn execute(&self, command: CreateBlogCommand) -> Result<BlogResult, CreateBlogError>;
}
