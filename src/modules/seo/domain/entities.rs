use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_TITLE_LEN: usize = 70;
pub const MAX_DESCRIPTION_LEN: usize = 160;
pub const MAX_KEYWORDS: usize = 20;
pub const MAX_KEYWORD_LEN: usize = 50;

/// Search metadata for one site page, keyed by a kebab-case page name such as `home`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SeoEntry {
    pub id: Uuid,
    pub page: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}
