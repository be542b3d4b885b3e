use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{self, ValidationError};

pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_RECIPIENTS: usize = 500;
/// Submitted lists longer than `MAX_RECIPIENTS` times this are refused before parsing.
const RAW_RECIPIENT_FACTOR: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Sending,
    Sent,
    PartiallySent,
    Failed,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Sending => "sending",
            CampaignStatus::Sent => "sent",
            CampaignStatus::PartiallySent => "partially_sent",
            CampaignStatus::Failed => "failed",
        }
    }

    /// Statuses a send may start from. A failed campaign is retried in full.
    pub fn is_sendable(&self) -> bool {
        matches!(self, CampaignStatus::Draft | CampaignStatus::Failed)
    }

    /// Final status once every recipient has been attempted.
    pub fn from_outcome(sent: usize, failed: usize) -> Self {
        match (sent, failed) {
            (_, 0) => CampaignStatus::Sent,
            (0, _) => CampaignStatus::Failed,
            _ => CampaignStatus::PartiallySent,
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CampaignStatus::Draft),
            "sending" => Ok(CampaignStatus::Sending),
            "sent" => Ok(CampaignStatus::Sent),
            "partially_sent" => Ok(CampaignStatus::PartiallySent),
            "failed" => Ok(CampaignStatus::Failed),
            other => Err(format!("unknown campaign status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MarketingMail {
    pub id: Uuid,
    pub subject: String,
    pub html_body: String,
    pub recipients: Vec<String>,
    pub status: CampaignStatus,
    pub sent_count: i32,
    pub failed_count: i32,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMarketingMail {
    pub subject: String,
    pub html_body: String,
    pub recipients: Vec<String>,
}

/// Result of one send run.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SendReport {
    pub campaign_id: Uuid,
    pub status: CampaignStatus,
    pub sent_count: usize,
    pub failed_count: usize,
    pub failed_recipients: Vec<String>,
}

/// Validates every address and drops case-insensitive duplicates, keeping
/// the first spelling seen.
pub fn normalize_recipients(values: Vec<String>) -> Result<Vec<String>, ValidationError> {
    let too_many = ValidationError::TooManyItems {
        field: "recipients",
        max: MAX_RECIPIENTS,
    };
    if values.len() > MAX_RECIPIENTS * RAW_RECIPIENT_FACTOR {
        return Err(too_many);
    }

    let mut seen = HashSet::with_capacity(values.len());
    let mut out: Vec<String> = Vec::new();

    for value in values {
        let address = validation::email("recipients", &value)?;
        if seen.insert(address.to_ascii_lowercase()) {
            if out.len() == MAX_RECIPIENTS {
                return Err(too_many);
            }
            out.push(address);
        }
    }

    if out.is_empty() {
        return Err(ValidationError::Required("recipients"));
    }

    Ok(out)
}
