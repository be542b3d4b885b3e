use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::marketing_mail::domain::entities::{
    CampaignStatus, MarketingMail, NewMarketingMail,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignOutcome {
    pub status: CampaignStatus,
    pub sent_count: i32,
    pub failed_count: i32,
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarketingMailRepositoryError {
    #[error("Campaign not found")]
    NotFound,

    /// The campaign exists but its status does not allow the transition.
    #[error("Campaign is {0}")]
    InvalidState(CampaignStatus),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

#[async_trait]
pub trait MarketingMailRepository: Send + Sync {
    async fn create(&self, data: NewMarketingMail)
        -> Result<MarketingMail, MarketingMailRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<MarketingMail, MarketingMailRepositoryError>;

    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<MarketingMail>, MarketingMailRepositoryError>;

    /// Atomically moves a draft or failed campaign to `sending`. A campaign
    /// already `sending` is taken over when its last update is before `stale_before`.
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

    /// Deletes unless the campaign is currently sending.
    async fn delete(&self, id: Uuid) -> Result<(), MarketingMailRepositoryError>;
}
