use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::modules::ad::application::ports::outgoing::AdRepository;
use crate::modules::ad::domain::entities::{
    validate_schedule, Ad, AdPlacement, NewAd, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN,
};
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone)]
pub struct CreateAdData {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub target_url: String,
    pub placement: AdPlacement,
    pub is_active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateAdCommand {
    data: NewAd,
}

impl CreateAdCommand {
    pub fn new(raw: CreateAdData) -> Result<Self, ValidationError> {
        validate_schedule(raw.starts_at, raw.ends_at)?;

        let data = NewAd {
            title: validation::required_text("title", &raw.title, MAX_TITLE_LEN)?,
            description: validation::optional_text(
                "description",
                raw.description,
                MAX_DESCRIPTION_LEN,
            )?,
            image_url: validation::http_url("image_url", &raw.image_url)?,
            target_url: validation::http_url("target_url", &raw.target_url)?,
            placement: raw.placement,
            is_active: raw.is_active,
            starts_at: raw.starts_at,
            ends_at: raw.ends_at,
        };

        Ok(Self { data })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateAdError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAdUseCase: Send + Sync {
    async fn execute(&self, command: CreateAdCommand) -> Result<Ad, CreateAdError>;
}

pub struct CreateAdService<R>
where
    R: AdRepository,
{
    repository: R,
}

impl<R> CreateAdService<R>
where
    R: AdRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateAdUseCase for CreateAdService<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, command: CreateAdCommand) -> Result<Ad, CreateAdError> {
        let ad = self
            .repository
            .create(command.data)
            .await
            .map_err(|e| CreateAdError::RepositoryError(e.to_string()))?;

        info!(ad_id = %ad.id, placement = %ad.placement, "Ad created");
        Ok(ad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ad::application::use_cases::test_support::{sample_ad, MockAdRepo};
    use chrono::Duration;

    fn raw() -> CreateAdData {
        CreateAdData {
            title: "Spring sale".to_string(),
            description: Some("".to_string()),
            image_url: "https://cdn.example.com/ad.png".to_string(),
            target_url: "https://shop.example.com".to_string(),
            placement: AdPlacement::Header,
            is_active: true,
            starts_at: None,
            ends_at: None,
        }
    }

    #[test]
    fn blank_description_becomes_none() {
        let command = CreateAdCommand::new(raw()).unwrap();
        assert_eq!(command.data.description, None);
    }

    #[test]
    fn inverted_schedule_is_rejected() {
        let now = Utc::now();
        let mut input = raw();
        input.starts_at = Some(now);
        input.ends_at = Some(now - Duration::hours(1));

        assert_eq!(CreateAdCommand::new(input).unwrap_err().code(), "INVALID_VALUE");
    }

    #[test]
    fn target_must_be_http() {
        let mut input = raw();
        input.target_url = "mailto:sales@example.com".to_string();

        assert_eq!(
            CreateAdCommand::new(input).unwrap_err(),
            ValidationError::InvalidUrl("target_url")
        );
    }

    #[tokio::test]
    async fn creates_ad() {
        let mut repo = MockAdRepo::new();
        repo.expect_create().times(1).returning(|_| Ok(sample_ad()));

        let ad = CreateAdService::new(repo)
            .execute(CreateAdCommand::new(raw()).unwrap())
            .await
            .unwrap();
        assert_eq!(ad.title, "Spring sale");
    }
}
