use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{
    MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_IMAGES, MAX_TECHNOLOGIES, MAX_TECHNOLOGY_LEN,
    MAX_TITLE_LEN,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    CreatePortfolioData, PortfolioResult,
};
use crate::shared::validation::{self, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePortfolioCommand {
    data: CreatePortfolioData,
}

impl CreatePortfolioCommand {
    /// Validates and normalises raw input.
    pub fn new(raw: CreatePortfolioData) -> Result<Self, ValidationError> {
        let data = CreatePortfolioData {
            title: validation::required_text("title", &raw.title, MAX_TITLE_LEN)?,
            slug: validation::slug("slug", &raw.slug)?,
            description: validation::required_text(
                "description",
                &raw.description,
                MAX_DESCRIPTION_LEN,
            )?,
            category: validation::optional_text("category", raw.category, MAX_CATEGORY_LEN)?,
            technologies: validation::string_list(
                "technologies",
                raw.technologies,
                MAX_TECHNOLOGIES,
                MAX_TECHNOLOGY_LEN,
            )?,
            images: validation::url_list("images", raw.images, MAX_IMAGES)?,
            thumbnail_url: validation::optional_http_url("thumbnail_url", raw.thumbnail_url)?,
            live_url: validation::optional_http_url("live_url", raw.live_url)?,
            repo_url: validation::optional_http_url("repo_url", raw.repo_url)?,
            is_featured: raw.is_featured,
        };

        Ok(Self { data })
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn into_data(self) -> CreatePortfolioData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePortfolioError {
    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreatePortfolioCommand,
    ) -> Result<PortfolioResult, CreatePortfolioError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> CreatePortfolioData {
        CreatePortfolioData {
            title: "  Shop Rewrite ".to_string(),
            slug: "Shop-Rewrite".to_string(),
            description: "A storefront".to_string(),
            category: Some("  ".to_string()),
            technologies: vec!["Rust".to_string(), "Rust".to_string(), "Actix".to_string()],
            images: vec!["https://cdn.example.com/a.png".to_string()],
            thumbnail_url: None,
            live_url: Some("https://shop.example.com".to_string()),
            repo_url: None,
            is_featured: true,
        }
    }

    #[test]
    fn normalises_valid_input() {
        let data = CreatePortfolioCommand::new(raw()).unwrap().into_data();

        assert_eq!(data.title, "Shop Rewrite");
        assert_eq!(data.slug, "shop-rewrite");
        assert_eq!(data.category, None);
        assert_eq!(data.technologies, vec!["Rust", "Actix"]);
        assert!(data.is_featured);
    }

    #[test]
    fn rejects_empty_title() {
        let mut input = raw();
        input.title = " ".to_string();

        assert_eq!(
            CreatePortfolioCommand::new(input).unwrap_err(),
            ValidationError::Required("title")
        );
    }

    #[test]
    fn rejects_bad_slug() {
        let mut input = raw();
        input.slug = "no spaces".to_string();

        assert_eq!(
            CreatePortfolioCommand::new(input).unwrap_err(),
            ValidationError::InvalidSlug("slug")
        );
    }

    #[test]
    fn rejects_non_http_image() {
        let mut input = raw();
        input.images = vec!["file:///etc/passwd".to_string()];

        assert_eq!(
            CreatePortfolioCommand::new(input).unwrap_err(),
            ValidationError::InvalidUrl("images")
        );
    }

    #[test]
    fn rejects_too_many_technologies() {
        let mut input = raw();
        input.technologies = (0..=MAX_TECHNOLOGIES).map(|i| format!("tech-{i}")).collect();

        assert!(matches!(
            CreatePortfolioCommand::new(input),
            Err(ValidationError::TooManyItems { field: "technologies", .. })
        ));
    }
}
