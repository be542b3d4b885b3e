use async_trait::async_trait;
use tracing::info;

use crate::modules::seo::application::ports::outgoing::SeoRepository;
use crate::modules::seo::domain::entities::{
    SeoData, SeoEntry, MAX_DESCRIPTION_LEN, MAX_KEYWORDS, MAX_KEYWORD_LEN, MAX_TITLE_LEN,
};
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone)]
pub struct UpsertSeoCommand {
    page: String,
    data: SeoData,
}

impl UpsertSeoCommand {
    pub fn new(page: &str, raw: SeoData) -> Result<Self, ValidationError> {
        let page = validation::slug("page", page)?;

        let data = SeoData {
            title: validation::required_text("title", &raw.title, MAX_TITLE_LEN)?,
            description: validation::required_text(
                "description",
                &raw.description,
                MAX_DESCRIPTION_LEN,
            )?,
            keywords: validation::tags("keywords", raw.keywords, MAX_KEYWORDS, MAX_KEYWORD_LEN)?,
            og_image: validation::optional_http_url("og_image", raw.og_image)?,
            canonical_url: validation::optional_http_url("canonical_url", raw.canonical_url)?,
        };

        Ok(Self { page, data })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpsertSeoError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpsertSeoUseCase: Send + Sync {
    async fn execute(&self, command: UpsertSeoCommand) -> Result<SeoEntry, UpsertSeoError>;
}

pub struct UpsertSeoService<R>
where
    R: SeoRepository,
{
    repository: R,
}

impl<R> UpsertSeoService<R>
where
    R: SeoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertSeoUseCase for UpsertSeoService<R>
where
    R: SeoRepository + Send + Sync,
{
    async fn execute(&self, command: UpsertSeoCommand) -> Result<SeoEntry, UpsertSeoError> {
        let entry = self
            .repository
            .upsert(&command.page, command.data)
            .await
            .map_err(|e| UpsertSeoError::RepositoryError(e.to_string()))?;

        info!(page = %entry.page, "SEO entry saved");
        Ok(entry)
    }
}
