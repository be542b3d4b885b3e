use async_trait::async_trait;
use uuid::Uuid;

use super::validate_price;
use crate::modules::service::application::ports::outgoing::{
    OfferingRepository, OfferingRepositoryError, PatchOfferingData,
};
use crate::modules::service::domain::entities::{
    ServiceOffering, MAX_DESCRIPTION_LEN, MAX_FEATURES, MAX_FEATURE_LEN, MAX_ICON_LEN,
    MAX_TITLE_LEN,
};
use crate::shared::validation::{self, not_nullable, nullable_text, ValidationError};

#[derive(Debug, Clone)]
pub struct PatchOfferingCommand {
    data: PatchOfferingData,
}

impl PatchOfferingCommand {
    pub fn new(raw: PatchOfferingData) -> Result<Self, ValidationError> {
        not_nullable("title", &raw.title)?;
        not_nullable("description", &raw.description)?;
        not_nullable("features", &raw.features)?;
        not_nullable("display_order", &raw.display_order)?;
        not_nullable("is_active", &raw.is_active)?;

        let data = PatchOfferingData {
            title: raw
                .title
                .try_map(|v| validation::required_text("title", &v, MAX_TITLE_LEN))?,
            description: raw.description.try_map(|v| {
                validation::required_text("description", &v, MAX_DESCRIPTION_LEN)
            })?,
            icon: nullable_text("icon", raw.icon, MAX_ICON_LEN)?,
            features: raw.features.try_map(|v| {
                validation::string_list("features", v, MAX_FEATURES, MAX_FEATURE_LEN)
            })?,
            starting_price: raw.starting_price.try_map(validate_price)?,
            ..raw
        };

        Ok(Self { data })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchOfferingError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchOfferingUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        command: PatchOfferingCommand,
    ) -> Result<ServiceOffering, PatchOfferingError>;
}

pub struct PatchOfferingService<R>
where
    R: OfferingRepository,
{
    repository: R,
}

impl<R> PatchOfferingService<R>
where
    R: OfferingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchOfferingUseCase for PatchOfferingService<R>
where
    R: OfferingRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        command: PatchOfferingCommand,
    ) -> Result<ServiceOffering, PatchOfferingError> {
        self.repository
            .patch(id, command.data)
            .await
            .map_err(|e| match e {
                OfferingRepositoryError::NotFound => PatchOfferingError::NotFound,
                other => PatchOfferingError::RepositoryError(other.to_string()),
            })
    }
}
