// src/modules/blog/application/ports/outgoing/blog_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateBlogData {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub author: String,
    pub is_published: bool,
}

/// Patch semantics follow `PatchField`; `cover_image` is the only nullable column.
/// `excerpt: Null` re-derives the excerpt from the stored content.
/// Changing `is_published` also moves `published_at`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchBlogData {
    pub title: PatchField<String>,
    pub excerpt: PatchField<String>,
    pub content: PatchField<String>,
    pub cover_image: PatchField<String>,
    pub tags: PatchField<Vec<String>>,
    pub author: PatchField<String>,
    pub is_published: PatchField<bool>,
}

impl PatchBlogData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.excerpt.is_unset()
            && self.content.is_unset()
            && self.cover_image.is_unset()
            && self.tags.is_unset()
            && self.author.is_unset()
            && self.is_published.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogResult {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub author: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlogRepositoryError {
    #[error("Blog not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Stamps `published_at` when created already published.
    async fn create_blog(&self, data: CreateBlogData) -> Result<BlogResult, BlogRepositoryError>;

    async fn patch_blog(
        &self,
        blog_id: Uuid,
        data: PatchBlogData,
    ) -> Result<BlogResult, BlogRepositoryError>;

    async fn delete_blog(&self, blog_id: Uuid) -> Result<(), BlogRepositoryError>;
}
