use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_FULL_NAME_LEN: usize = 100;
pub const MAX_HEADLINE_LEN: usize = 150;
pub const MAX_BIO_LEN: usize = 5000;
pub const MAX_PHONE_LEN: usize = 30;
pub const MAX_LOCATION_LEN: usize = 100;
pub const MAX_SOCIAL_LINKS: usize = 20;
pub const MAX_PLATFORM_LEN: usize = 50;
pub const MAX_SKILLS: usize = 50;
pub const MAX_SKILL_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// The site owner's profile. Exactly one row exists once it has been saved.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PersonalDetails {
    pub full_name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub skills: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement written by an upsert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonalDetailsData {
    pub full_name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub skills: Vec<String>,
}

/// Primary key of the singleton row.
pub fn singleton_id() -> Uuid {
    Uuid::nil()
}
