use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_EXCERPT_LEN: usize = 300;
pub const MAX_CONTENT_LEN: usize = 100_000;
pub const MAX_AUTHOR_LEN: usize = 100;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LEN: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Published,
    Draft,
}

/// Publication timestamp after a publish flag change.
///
/// The first publish stamps `now`, republishing keeps the original stamp and
/// unpublishing clears it.
pub fn next_published_at(
    current: Option<DateTime<Utc>>,
    is_published: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if is_published {
        Some(current.unwrap_or(now))
    } else {
        None
    }
}

/// Excerpt used when the author leaves it blank: the first sentence-ish
/// chunk of the content, cut on a character boundary.
pub fn derive_excerpt(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");

    if flat.chars().count() <= MAX_EXCERPT_LEN {
        return flat;
    }

    let cut: String = flat.chars().take(MAX_EXCERPT_LEN - 3).collect();
    let cut = match cut.rfind(' ') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}...", cut.trim_end())
}
