use async_trait::async_trait;
use tracing::info;

use crate::modules::marketing_mail::application::ports::outgoing::MarketingMailRepository;
use crate::modules::marketing_mail::domain::entities::{
    normalize_recipients, MarketingMail, NewMarketingMail, MAX_SUBJECT_LEN,
};
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct CreateCampaignData {
    pub subject: String,
    pub html_body: String,
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CreateCampaignCommand {
    data: NewMarketingMail,
}

impl CreateCampaignCommand {
    pub fn new(raw: CreateCampaignData) -> Result<Self, ValidationError> {
        if raw.html_body.trim().is_empty() {
            return Err(ValidationError::Required("html_body"));
        }

        let data = NewMarketingMail {
            subject: validation::required_text("subject", &raw.subject, MAX_SUBJECT_LEN)?,
            html_body: raw.html_body,
            recipients: normalize_recipients(raw.recipients)?,
        };

        Ok(Self { data })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCampaignError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCampaignUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCampaignCommand,
    ) -> Result<MarketingMail, CreateCampaignError>;
}

pub struct CreateCampaignService<R>
where
    R: MarketingMailRepository,
{
    repository: R,
}

impl<R> CreateCampaignService<R>
where
    R: MarketingMailRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCampaignUseCase for CreateCampaignService<R>
where
    R: MarketingMailRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCampaignCommand,
    ) -> Result<MarketingMail, CreateCampaignError> {
        let campaign = self
            .repository
            .create(command.data)
            .await
            .map_err(|e| CreateCampaignError::RepositoryError(e.to_string()))?;

        info!(
            campaign_id = %campaign.id,
            recipients = campaign.recipients.len(),
            "Marketing campaign drafted"
        );
        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::marketing_mail::application::use_cases::test_support::{
        campaign, MockMarketingMailRepo,
    };
    use crate::modules::marketing_mail::domain::entities::CampaignStatus;

    #[test]
    fn body_is_required() {
        let err = CreateCampaignCommand::new(CreateCampaignData {
            subject: "Hi".to_string(),
            html_body: "   ".to_string(),
            recipients: vec!["a@example.com".to_string()],
        })
        .unwrap_err();

        assert_eq!(err, ValidationError::Required("html_body"));
    }

    #[tokio::test]
    async fn stores_deduplicated_recipients() {
        let mut repo = MockMarketingMailRepo::new();
        repo.expect_create()
            .withf(|data| data.recipients == vec!["a@example.com".to_string()])
            .times(1)
            .returning(|_| Ok(campaign(&["a@example.com"], CampaignStatus::Draft)));

        let command = CreateCampaignCommand::new(CreateCampaignData {
            subject: "Autumn news".to_string(),
            html_body: "<p>Hello</p>".to_string(),
            recipients: vec!["a@example.com".to_string(), "A@EXAMPLE.COM".to_string()],
        })
        .unwrap();

        let created = CreateCampaignService::new(repo).execute(command).await.unwrap();
        assert_eq!(created.status, CampaignStatus::Draft);
    }
}
