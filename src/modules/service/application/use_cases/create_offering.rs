use async_trait::async_trait;
use tracing::info;

use super::validate_price;
use crate::modules::service::application::ports::outgoing::{
    OfferingRepository, OfferingRepositoryError,
};
use crate::modules::service::domain::entities::{
    NewServiceOffering, ServiceOffering, MAX_DESCRIPTION_LEN, MAX_FEATURES, MAX_FEATURE_LEN,
    MAX_ICON_LEN, MAX_TITLE_LEN,
};
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct CreateOfferingData {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub features: Vec<String>,
    pub starting_price: Option<f64>,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct CreateOfferingCommand {
    data: NewServiceOffering,
}

impl CreateOfferingCommand {
    pub fn new(raw: CreateOfferingData) -> Result<Self, ValidationError> {
        let data = NewServiceOffering {
            title: validation::required_text("title", &raw.title, MAX_TITLE_LEN)?,
            slug: validation::slug("slug", &raw.slug)?,
            description: validation::required_text(
                "description",
                &raw.description,
                MAX_DESCRIPTION_LEN,
            )?,
            icon: validation::optional_text("icon", raw.icon, MAX_ICON_LEN)?,
            features: validation::string_list(
                "features",
                raw.features,
                MAX_FEATURES,
                MAX_FEATURE_LEN,
            )?,
            starting_price: raw.starting_price.map(validate_price).transpose()?,
            display_order: raw.display_order,
            is_active: raw.is_active,
        };

        Ok(Self { data })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateOfferingError {
    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateOfferingUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateOfferingCommand,
    ) -> Result<ServiceOffering, CreateOfferingError>;
}

pub struct CreateOfferingService<R>
where
    R: OfferingRepository,
{
    repository: R,
}

impl<R> CreateOfferingService<R>
where
    R: OfferingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateOfferingUseCase for CreateOfferingService<R>
where
    R: OfferingRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateOfferingCommand,
    ) -> Result<ServiceOffering, CreateOfferingError> {
        let offering = self
            .repository
            .create(command.data)
            .await
            .map_err(|e| match e {
                OfferingRepositoryError::SlugAlreadyExists => CreateOfferingError::SlugAlreadyExists,
                other => CreateOfferingError::RepositoryError(other.to_string()),
            })?;

        info!(service_id = %offering.id, slug = %offering.slug, "Service created");
        Ok(offering)
    }
}
