use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::{
    MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_IMAGES, MAX_TECHNOLOGIES, MAX_TECHNOLOGY_LEN,
    MAX_TITLE_LEN,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    PatchPortfolioData, PortfolioResult,
};
use crate::shared::validation::{self, not_nullable, nullable_text, nullable_url, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct PatchPortfolioCommand {
    data: PatchPortfolioData,
}

impl PatchPortfolioCommand {
    pub fn new(raw: PatchPortfolioData) -> Result<Self, ValidationError> {
        not_nullable("title", &raw.title)?;
        not_nullable("description", &raw.description)?;
        not_nullable("technologies", &raw.technologies)?;
        not_nullable("images", &raw.images)?;
        not_nullable("is_featured", &raw.is_featured)?;

        let data = PatchPortfolioData {
            title: raw
                .title
                .try_map(|v| validation::required_text("title", &v, MAX_TITLE_LEN))?,
            description: raw.description.try_map(|v| {
                validation::required_text("description", &v, MAX_DESCRIPTION_LEN)
            })?,
            category: nullable_text("category", raw.category, MAX_CATEGORY_LEN)?,
            technologies: raw.technologies.try_map(|v| {
                validation::string_list("technologies", v, MAX_TECHNOLOGIES, MAX_TECHNOLOGY_LEN)
            })?,
            images: raw
                .images
                .try_map(|v| validation::url_list("images", v, MAX_IMAGES))?,
            thumbnail_url: nullable_url("thumbnail_url", raw.thumbnail_url)?,
            live_url: nullable_url("live_url", raw.live_url)?,
            repo_url: nullable_url("repo_url", raw.repo_url)?,
            is_featured: raw.is_featured,
        };

        Ok(Self { data })
    }

    pub fn into_data(self) -> PatchPortfolioData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchPortfolioError {
    #[error("portfolio not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchPortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        portfolio_id: Uuid,
        command: PatchPortfolioCommand,
    ) -> Result<PortfolioResult, PatchPortfolioError>;
}
