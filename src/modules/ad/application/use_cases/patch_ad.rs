use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ad::application::ports::outgoing::{
    AdRepository, AdRepositoryError, PatchAdData,
};
use crate::modules::ad::domain::entities::{
    validate_schedule, Ad, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN,
};
use crate::shared::patch::PatchField;
use crate::shared::validation::{self, not_nullable, nullable_text, ValidationError};

#[derive(Debug, Clone)]
pub struct PatchAdCommand {
    data: PatchAdData,
}

impl PatchAdCommand {
    pub fn new(raw: PatchAdData) -> Result<Self, ValidationError> {
        not_nullable("title", &raw.title)?;
        not_nullable("image_url", &raw.image_url)?;
        not_nullable("target_url", &raw.target_url)?;
        not_nullable("placement", &raw.placement)?;
        not_nullable("is_active", &raw.is_active)?;

        let data = PatchAdData {
            title: raw
                .title
                .try_map(|v| validation::required_text("title", &v, MAX_TITLE_LEN))?,
            description: nullable_text("description", raw.description, MAX_DESCRIPTION_LEN)?,
            image_url: raw
                .image_url
                .try_map(|v| validation::http_url("image_url", &v))?,
            target_url: raw
                .target_url
                .try_map(|v| validation::http_url("target_url", &v))?,
            ..raw
        };

        Ok(Self { data })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchAdError {
    #[error("Ad not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AdRepositoryError> for PatchAdError {
    fn from(err: AdRepositoryError) -> Self {
        match err {
            AdRepositoryError::NotFound => PatchAdError::NotFound,
            other => PatchAdError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait PatchAdUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, command: PatchAdCommand) -> Result<Ad, PatchAdError>;
}

pub struct PatchAdService<R>
where
    R: AdRepository,
{
    repository: R,
}

impl<R> PatchAdService<R>
where
    R: AdRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn merged<T: Copy>(patch: &PatchField<T>, current: Option<T>) -> Option<T> {
    match patch {
        PatchField::Unset => current,
        PatchField::Null => None,
        PatchField::Value(v) => Some(*v),
    }
}

#[async_trait]
impl<R> PatchAdUseCase for PatchAdService<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, command: PatchAdCommand) -> Result<Ad, PatchAdError> {
        let data = command.data;

        // The schedule check needs the stored bound when only one side changes.
        if !data.starts_at.is_unset() || !data.ends_at.is_unset() {
            let current = self.repository.find_by_id(id).await?;
            validate_schedule(
                merged(&data.starts_at, current.starts_at),
                merged(&data.ends_at, current.ends_at),
            )?;
        }

        Ok(self.repository.patch(id, data).await?)
    }
}
