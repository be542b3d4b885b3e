use async_trait::async_trait;
use tracing::info;

use crate::modules::personal_details::application::ports::outgoing::PersonalDetailsRepository;
use crate::modules::personal_details::domain::entities::{
    PersonalDetails, PersonalDetailsData, SocialLink, MAX_BIO_LEN, MAX_FULL_NAME_LEN,
    MAX_HEADLINE_LEN, MAX_LOCATION_LEN, MAX_PHONE_LEN, MAX_PLATFORM_LEN, MAX_SKILLS,
    MAX_SKILL_LEN, MAX_SOCIAL_LINKS,
};
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone)]
pub struct UpsertPersonalDetailsCommand {
    data: PersonalDetailsData,
}

impl UpsertPersonalDetailsCommand {
    pub fn new(raw: PersonalDetailsData) -> Result<Self, ValidationError> {
        if raw.social_links.len() > MAX_SOCIAL_LINKS {
            return Err(ValidationError::TooManyItems {
                field: "social_links",
                max: MAX_SOCIAL_LINKS,
            });
        }

        let social_links = raw
            .social_links
            .into_iter()
            .map(|link| {
                Ok(SocialLink {
                    platform: validation::required_text(
                        "social_links.platform",
                        &link.platform,
                        MAX_PLATFORM_LEN,
                    )?,
                    url: validation::http_url("social_links.url", &link.url)?,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let data = PersonalDetailsData {
            full_name: validation::required_text("full_name", &raw.full_name, MAX_FULL_NAME_LEN)?,
            headline: validation::required_text("headline", &raw.headline, MAX_HEADLINE_LEN)?,
            bio: validation::required_text("bio", &raw.bio, MAX_BIO_LEN)?,
            email: validation::email("email", &raw.email)?,
            phone: validation::optional_text("phone", raw.phone, MAX_PHONE_LEN)?,
            location: validation::optional_text("location", raw.location, MAX_LOCATION_LEN)?,
            avatar_url: validation::optional_http_url("avatar_url", raw.avatar_url)?,
            resume_url: validation::optional_http_url("resume_url", raw.resume_url)?,
            social_links,
            skills: validation::string_list("skills", raw.skills, MAX_SKILLS, MAX_SKILL_LEN)?,
        };

        Ok(Self { data })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpsertPersonalDetailsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpsertPersonalDetailsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpsertPersonalDetailsCommand,
    ) -> Result<PersonalDetails, UpsertPersonalDetailsError>;
}

pub struct UpsertPersonalDetailsService<R>
where
    R: PersonalDetailsRepository,
{
    repository: R,
}

impl<R> UpsertPersonalDetailsService<R>
where
    R: PersonalDetailsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertPersonalDetailsUseCase for UpsertPersonalDetailsService<R>
where
    R: PersonalDetailsRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpsertPersonalDetailsCommand,
    ) -> Result<PersonalDetails, UpsertPersonalDetailsError> {
        let saved = self
            .repository
            .upsert(command.data)
            .await
            .map_err(|e| UpsertPersonalDetailsError::RepositoryError(e.to_string()))?;

        info!("Personal details saved");
        Ok(saved)
    }
}
