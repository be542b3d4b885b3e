use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::ad::domain::entities::{Ad, AdPlacement, NewAd};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::PatchField;

/// `description`, `starts_at` and `ends_at` are the nullable columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchAdData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub image_url: PatchField<String>,
    pub target_url: PatchField<String>,
    pub placement: PatchField<AdPlacement>,
    pub is_active: PatchField<bool>,
    pub starts_at: PatchField<DateTime<Utc>>,
    pub ends_at: PatchField<DateTime<Utc>>,
}

impl PatchAdData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.image_url.is_unset()
            && self.target_url.is_unset()
            && self.placement.is_unset()
            && self.is_active.is_unset()
            && self.starts_at.is_unset()
            && self.ends_at.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdRepositoryError {
    #[error("Ad not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

#[async_trait]
pub trait AdRepository: Send + Sync {
    async fn create(&self, data: NewAd) -> Result<Ad, AdRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Ad, AdRepositoryError>;

    async fn list(
        &self,
        placement: Option<AdPlacement>,
        page: PageRequest,
    ) -> Result<PageResult<Ad>, AdRepositoryError>;

    /// Rows with `is_active = true`; schedules are not evaluated here.
    async fn list_enabled(
        &self,
        placement: Option<AdPlacement>,
    ) -> Result<Vec<Ad>, AdRepositoryError>;

    async fn patch(&self, id: Uuid, data: PatchAdData) -> Result<Ad, AdRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AdRepositoryError>;
}
