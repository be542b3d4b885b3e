pub mod create_campaign;
pub mod delete_campaign;
pub mod get_campaign;
pub mod list_campaigns;
pub mod send_campaign;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use uuid::Uuid;

    use crate::modules::marketing_mail::application::ports::outgoing::{
        CampaignOutcome, MarketingMailRepository, MarketingMailRepositoryError,
    };
    use crate::modules::marketing_mail::domain::entities::{
        CampaignStatus, MarketingMail, NewMarketingMail,
    };
    use crate::shared::pagination::{PageRequest, PageResult};

    mock! {
        pub MarketingMailRepo {}
        #[async_trait]
        impl MarketingMailRepository for MarketingMailRepo {
            async fn create(
                &self,
                data: NewMarketingMail,
            ) -> Result<MarketingMail, MarketingMailRepositoryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<MarketingMail, MarketingMailRepositoryError>;
            async fn list(
                &self,
                page: PageRequest,
            ) -> Result<PageResult<MarketingMail>, MarketingMailRepositoryError>;
            async fn claim_for_sending(
                &self,
                id: Uuid,
                stale_before: DateTime<Utc>,
            ) -> Result<MarketingMail, MarketingMailRepositoryError>;
            async fn record_outcome(
                &self,
                id: Uuid,
                outcome: CampaignOutcome,
            ) -> Result<MarketingMail, MarketingMailRepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), MarketingMailRepositoryError>;
        }
    }

    pub fn campaign(recipients: &[&str], status: CampaignStatus) -> MarketingMail {
        MarketingMail {
            id: Uuid::new_v4(),
            subject: "Autumn news".to_string(),
            html_body: "<p>Hello</p>".to_string(),
            recipients: recipients.iter().map(|r| r.to_string()).collect(),
            status,
            sent_count: 0,
            failed_count: 0,
            sent_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
