use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::ValidationError;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdPlacement {
    Header,
    Sidebar,
    Footer,
    Inline,
}

impl AdPlacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdPlacement::Header => "header",
            AdPlacement::Sidebar => "sidebar",
            AdPlacement::Footer => "footer",
            AdPlacement::Inline => "inline",
        }
    }
}

impl fmt::Display for AdPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" => Ok(AdPlacement::Header),
            "sidebar" => Ok(AdPlacement::Sidebar),
            "footer" => Ok(AdPlacement::Footer),
            "inline" => Ok(AdPlacement::Inline),
            other => Err(format!("unknown placement '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Ad {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub target_url: String,
    pub placement: AdPlacement,
    pub is_active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ad {
    /// Enabled and inside its schedule; a missing bound is open.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.starts_at.map_or(true, |start| start <= now)
            && self.ends_at.map_or(true, |end| now < end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAd {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub target_url: String,
    pub placement: AdPlacement,
    pub is_active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// `ends_at` must be strictly after `starts_at` when both are set.
pub fn validate_schedule(
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match (starts_at, ends_at) {
        (Some(start), Some(end)) if end <= start => {
            Err(ValidationError::invalid("ends_at", "must be after starts_at"))
        }
        _ => Ok(()),
    }
}
