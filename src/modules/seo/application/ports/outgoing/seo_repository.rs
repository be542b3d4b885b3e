use async_trait::async_trait;

use crate::modules::seo::domain::entities::{SeoData, SeoEntry};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeoRepositoryError {
    #[error("SEO entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait SeoRepository: Send + Sync {
    async fn find_by_page(&self, page: &str) -> Result<Option<SeoEntry>, SeoRepositoryError>;

    /// All entries ordered by page key.
    async fn list(&self) -> Result<Vec<SeoEntry>, SeoRepositoryError>;

    /// Inserts or replaces the entry for `page`.
    async fn upsert(&self, page: &str, data: SeoData) -> Result<SeoEntry, SeoRepositoryError>;

    async fn delete(&self, page: &str) -> Result<(), SeoRepositoryError>;
}
