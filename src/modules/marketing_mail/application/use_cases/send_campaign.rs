use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::marketing_mail::application::ports::outgoing::{
    CampaignOutcome, MarketingMailRepository, MarketingMailRepositoryError,
};
use crate::modules::marketing_mail::application::marketing_config::DEFAULT_SENDING_TIMEOUT;
use crate::modules::marketing_mail::domain::entities::{CampaignStatus, MarketingMail, SendReport};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendCampaignError {
    #[error("Campaign not found")]
    NotFound,

    #[error("Campaign cannot be sent while {0}")]
    NotSendable(CampaignStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MarketingMailRepositoryError> for SendCampaignError {
    fn from(err: MarketingMailRepositoryError) -> Self {
        match err {
            MarketingMailRepositoryError::NotFound => SendCampaignError::NotFound,
            MarketingMailRepositoryError::InvalidState(status) => {
                SendCampaignError::NotSendable(status)
            }
            other => SendCampaignError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait SendCampaignUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<SendReport, SendCampaignError>;
}

const RECORD_ATTEMPTS: u32 = 3;
const RECORD_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Delivers one message per recipient with at most `concurrency` sends in flight.
///
/// Delivery runs on its own task once the campaign is claimed, so a caller that
/// stops waiting does not leave the campaign in `sending`.
pub struct SendCampaignService<R>
where
    R: MarketingMailRepository,
{
    repository: Arc<R>,
    sender: Arc<dyn EmailSender + Send + Sync>,
    concurrency: usize,
    sending_timeout: Duration,
}

impl<R> SendCampaignService<R>
where
    R: MarketingMailRepository,
{
    pub fn new(repository: R, sender: Arc<dyn EmailSender + Send + Sync>, concurrency: usize) -> Self {
        Self {
            repository: Arc::new(repository),
            sender,
            concurrency: concurrency.max(1),
            sending_timeout: DEFAULT_SENDING_TIMEOUT,
        }
    }

    /// A campaign left in `sending` longer than this may be claimed again.
    pub fn with_sending_timeout(mut self, timeout: Duration) -> Self {
        self.sending_timeout = timeout;
        self
    }

    fn stale_before(&self) -> DateTime<Utc> {
        let timeout = chrono::Duration::from_std(self.sending_timeout)
            .unwrap_or_else(|_| chrono::Duration::seconds(DEFAULT_SENDING_TIMEOUT.as_secs() as i64));
        Utc::now() - timeout
    }
}

#[async_trait]
impl<R> SendCampaignUseCase for SendCampaignService<R>
where
    R: MarketingMailRepository + Send + Sync + 'static,
{
    async fn execute(&self, id: Uuid) -> Result<SendReport, SendCampaignError> {
        let campaign = self
            .repository
            .claim_for_sending(id, self.stale_before())
            .await?;

        info!(
            campaign_id = %id,
            recipients = campaign.recipients.len(),
            concurrency = self.concurrency,
            "Sending marketing campaign"
        );

        let delivery = tokio::spawn(deliver(
            Arc::clone(&self.repository),
            Arc::clone(&self.sender),
            campaign,
            self.concurrency,
        ));

        match delivery.await {
            Ok(result) => result,
            Err(e) => {
                error!(campaign_id = %id, error = %e, "Campaign delivery task aborted");
                Err(SendCampaignError::RepositoryError(e.to_string()))
            }
        }
    }
}

async fn deliver<R>(
    repository: Arc<R>,
    sender: Arc<dyn EmailSender + Send + Sync>,
    campaign: MarketingMail,
    concurrency: usize,
) -> Result<SendReport, SendCampaignError>
where
    R: MarketingMailRepository,
{
    let id = campaign.id;
    let total = campaign.recipients.len();
    let subject: Arc<str> = Arc::from(campaign.subject);
    let body: Arc<str> = Arc::from(campaign.html_body);

    let failed_recipients: Vec<String> = stream::iter(campaign.recipients)
        .map(|to| {
            let sender = Arc::clone(&sender);
            let subject = Arc::clone(&subject);
            let body = Arc::clone(&body);
            async move {
                match sender.send_email(&to, &subject, &body).await {
                    Ok(()) => None,
                    Err(e) => {
                        warn!(campaign_id = %id, recipient = %to, error = %e, "Campaign delivery failed");
                        Some(to)
                    }
                }
            }
        })
        .buffer_unordered(concurrency)
        .filter_map(future::ready)
        .collect()
        .await;

    let failed_count = failed_recipients.len();
    let sent_count = total - failed_count;
    let status = CampaignStatus::from_outcome(sent_count, failed_count);

    let outcome = CampaignOutcome {
        status,
        sent_count: sent_count as i32,
        failed_count: failed_count as i32,
        sent_at: (sent_count > 0).then(Utc::now),
    };

    record_with_retry(repository.as_ref(), id, outcome).await?;

    info!(
        campaign_id = %id,
        status = %status,
        sent = sent_count,
        failed = failed_count,
        "Marketing campaign finished"
    );

    Ok(SendReport {
        campaign_id: id,
        status,
        sent_count,
        failed_count,
        failed_recipients,
    })
}

async fn record_with_retry<R>(
    repository: &R,
    id: Uuid,
    outcome: CampaignOutcome,
) -> Result<(), SendCampaignError>
where
    R: MarketingMailRepository,
{
    let mut attempt = 1;
    loop {
        match repository.record_outcome(id, outcome.clone()).await {
            Ok(_) => return Ok(()),
            Err(MarketingMailRepositoryError::DatabaseError(e)) if attempt < RECORD_ATTEMPTS => {
                warn!(campaign_id = %id, attempt, error = %e, "Retrying campaign outcome write");
                tokio::time::sleep(RECORD_RETRY_DELAY * attempt).await;
                attempt += 1;
            }
            Err(e) => {
                // The row stays `sending` until the sending timeout lets it be claimed again.
                error!(campaign_id = %id, error = %e, "Failed to record campaign outcome");
                return Err(SendCampaignError::RepositoryError(e.to_string()));
            }
        }
    }
}
