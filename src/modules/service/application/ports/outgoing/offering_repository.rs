use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::service::domain::entities::{NewServiceOffering, ServiceOffering};
use crate::shared::patch::PatchField;

/// The slug is fixed at creation; `icon` and `starting_price` are nullable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchOfferingData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub icon: PatchField<String>,
    pub features: PatchField<Vec<String>>,
    pub starting_price: PatchField<f64>,
    pub display_order: PatchField<i32>,
    pub is_active: PatchField<bool>,
}

impl PatchOfferingData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.icon.is_unset()
            && self.features.is_unset()
            && self.starting_price.is_unset()
            && self.display_order.is_unset()
            && self.is_active.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OfferingRepositoryError {
    #[error("Service not found")]
    NotFound,

    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait OfferingRepository: Send + Sync {
    async fn create(
        &self,
        data: NewServiceOffering,
    ) -> Result<ServiceOffering, OfferingRepositoryError>;

    /// Every offering when `active_only` is false, in display order.
    async fn list(&self, active_only: bool) -> Result<Vec<ServiceOffering>, OfferingRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchOfferingData,
    ) -> Result<ServiceOffering, OfferingRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), OfferingRepositoryError>;
}
