use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::{
    derive_excerpt, MAX_AUTHOR_LEN, MAX_CONTENT_LEN, MAX_EXCERPT_LEN, MAX_TAGS, MAX_TAG_LEN,
    MAX_TITLE_LEN,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogResult, PatchBlogData,
};
use crate::shared::patch::PatchField;
use crate::shared::validation::{self, not_nullable, nullable_url, ValidationError};

#[derive(Debug, Clone)]
pub struct PatchBlogCommand {
    data: PatchBlogData,
}

impl PatchBlogCommand {
    /// A blank excerpt is derived from the new content, or marked `Null` so the
    /// repository derives it from the stored content.
    pub fn new(raw: PatchBlogData) -> Result<Self, ValidationError> {
        not_nullable("title", &raw.title)?;
        not_nullable("excerpt", &raw.excerpt)?;
        not_nullable("content", &raw.content)?;
        not_nullable("tags", &raw.tags)?;
        not_nullable("author", &raw.author)?;
        not_nullable("is_published", &raw.is_published)?;

        let content = raw
            .content
            .try_map(|v| validation::required_text("content", &v, MAX_CONTENT_LEN))?;

        let excerpt = match raw.excerpt {
            PatchField::Value(v) if v.trim().is_empty() => match content.as_value() {
                Some(content) => PatchField::Value(derive_excerpt(content)),
                None => PatchField::Null,
            },
            other => other.try_map(|v| validation::required_text("excerpt", &v, MAX_EXCERPT_LEN))?,
        };

        let data = PatchBlogData {
            title: raw
                .title
                .try_map(|v| validation::required_text("title", &v, MAX_TITLE_LEN))?,
            excerpt,
            content,
            cover_image: nullable_url("cover_image", raw.cover_image)?,
            tags: raw
                .tags
                .try_map(|v| validation::tags("tags", v, MAX_TAGS, MAX_TAG_LEN))?,
            author: raw
                .author
                .try_map(|v| validation::required_text("author", &v, MAX_AUTHOR_LEN))?,
            is_published: raw.is_published,
        };

        Ok(Self { data })
    }

    pub fn into_data(self) -> PatchBlogData {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchBlogError {
    #[error("blog not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchBlogUseCase: Send + Sync {
    async fn execute(
        &self,
        blog_id: Uuid,
        command: PatchBlogCommand,
    ) -> Result<BlogResult, PatchBlogError>;
}
