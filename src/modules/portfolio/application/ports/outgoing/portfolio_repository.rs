// src/modules/portfolio/application/ports/outgoing/portfolio_repository.rs

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

/// Already validated by `CreatePortfolioCommand`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePortfolioData {
    pub title: String,

    /// Immutable after creation
    pub slug: String,

    pub description: String,
    pub category: Option<String>,

    /// Stored as JSONB arrays
    pub technologies: Vec<String>,
    pub images: Vec<String>,

    pub thumbnail_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub is_featured: bool,
}

/// Patch semantics:
/// - title/description/is_featured: Unset => keep, Value => replace
/// - technologies/images: Value(vec) => replace whole array
/// - category/thumbnail_url/live_url/repo_url: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchPortfolioData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub category: PatchField<String>,
    pub technologies: PatchField<Vec<String>>,
    pub images: PatchField<Vec<String>>,
    pub thumbnail_url: PatchField<String>,
    pub live_url: PatchField<String>,
    pub repo_url: PatchField<String>,
    pub is_featured: PatchField<bool>,
}

impl PatchPortfolioData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.category.is_unset()
            && self.technologies.is_unset()
            && self.images.is_unset()
            && self.thumbnail_url.is_unset()
            && self.live_url.is_unset()
            && self.repo_url.is_unset()
            && self.is_featured.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioResult {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: Option<String>,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio not found")]
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
pub trait PortfolioRepository: Send + Sync {
    async fn create_portfolio(
        &self,
        data: CreatePortfolioData,
    ) -> Result<PortfolioResult, PortfolioRepositoryError>;

    /// Slug is never touched by a patch.
    async fn patch_portfolio(
        &self,
        portfolio_id: Uuid,
        data: PatchPortfolioData,
    ) -> Result<PortfolioResult, PortfolioRepositoryError>;

    async fn delete_portfolio(&self, portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError>;
}
