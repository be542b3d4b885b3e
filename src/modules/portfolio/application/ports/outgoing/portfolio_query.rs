// src/modules/portfolio/application/ports/outgoing/portfolio_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioResult;
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Full record; reads return the same shape the repository writes.
pub type PortfolioView = PortfolioResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioCard {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: Option<String>,
    pub technologies: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioListFilter {
    /// Case-insensitive match on title or description
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub category: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn get_by_id(&self, portfolio_id: Uuid) -> Result<PortfolioView, PortfolioQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<PortfolioView, PortfolioQueryError>;

    /// Newest first
    async fn list(
        &self,
        filter: PortfolioListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PortfolioCard>, PortfolioQueryError>;
}
