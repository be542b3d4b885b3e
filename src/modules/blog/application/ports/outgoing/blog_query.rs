// src/modules/blog/application/ports/outgoing/blog_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::BlogStatus;
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogResult;
use crate::shared::pagination::{PageRequest, PageResult};

pub type BlogView = BlogResult;

/// List item without the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogCard {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub author: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogListFilter {
    pub search: Option<String>,
    /// Exact (lowercased) tag
    pub tag: Option<String>,
    pub status: Option<BlogStatus>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Blog not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait BlogQuery: Send + Sync {
    async fn get_by_id(&self, blog_id: Uuid) -> Result<BlogView, BlogQueryError>;

    /// Any status; callers decide whether drafts are visible.
    async fn get_by_slug(&self, slug: &str) -> Result<BlogView, BlogQueryError>;

    /// Published posts sort by `published_at` desc, everything else by `created_at` desc.
    async fn list(
        &self,
        filter: BlogListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BlogCard>, BlogQueryError>;
}
