// src/shared/validation.rs
//
// Field-level validation shared by every content command. Each helper trims
// its input and returns the normalised value that should be stored.

use email_address::EmailAddress;

use crate::shared::patch::PatchField;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub const MAX_SLUG_LEN: usize = 150;
pub const MAX_URL_LEN: usize = 2048;
/// Lists longer than `max_items` times this are refused before any entry is looked at.
const RAW_LIST_FACTOR: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{0} must contain lowercase letters, digits and single hyphens only")]
    InvalidSlug(&'static str),

    #[error("{0} must be an http or https URL")]
    InvalidUrl(&'static str),

    #[error("{0} must be a valid email address")]
    InvalidEmail(&'static str),

    #[error("{field} accepts at most {max} items")]
    TooManyItems { field: &'static str, max: usize },

    #[error("{field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ValidationError {
    /// Stable machine-readable code used in API error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required(_) => "FIELD_REQUIRED",
            ValidationError::TooLong { .. } => "FIELD_TOO_LONG",
            ValidationError::TooShort { .. } => "FIELD_TOO_SHORT",
            ValidationError::InvalidSlug(_) => "INVALID_SLUG",
            ValidationError::InvalidUrl(_) => "INVALID_URL",
            ValidationError::InvalidEmail(_) => "INVALID_EMAIL",
            ValidationError::TooManyItems { .. } => "TOO_MANY_ITEMS",
            ValidationError::InvalidValue { .. } => "INVALID_VALUE",
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

fn slug_regex() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"))
}

fn url_regex() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| {
        Regex::new(r"(?i)^https?://[a-z0-9](?:[a-z0-9.-]*[a-z0-9])?(?::\d{1,5})?(?:[/?#]\S*)?$")
            .expect("valid url regex")
    })
}

/// Non-empty trimmed text of at most `max` characters.
pub fn required_text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_string())
}

/// Like [`required_text`] with an additional lower bound.
pub fn text_between(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let value = required_text(field, value, max)?;

    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }

    Ok(value)
}

/// Optional text; blank input collapses to `None`.
pub fn optional_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => required_text(field, &v, max).map(Some),
    }
}

/// Kebab-case slug, normalised to lowercase.
pub fn slug(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim().to_lowercase();

    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    if value.len() > MAX_SLUG_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_SLUG_LEN,
        });
    }

    if !slug_regex().is_match(&value) {
        return Err(ValidationError::InvalidSlug(field));
    }

    Ok(value)
}

/// Derives a slug from free text ("Hello, World!" -> "hello-world").
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    out.chars().take(MAX_SLUG_LEN).collect::<String>().trim_end_matches('-').to_string()
}

pub fn http_url(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    if value.len() > MAX_URL_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_URL_LEN,
        });
    }

    if !url_regex().is_match(value) {
        return Err(ValidationError::InvalidUrl(field));
    }

    Ok(value.to_string())
}

pub fn optional_http_url(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => http_url(field, &v).map(Some),
    }
}

pub fn url_list(
    field: &'static str,
    values: Vec<String>,
    max_items: usize,
) -> Result<Vec<String>, ValidationError> {
    if values.len() > max_items {
        return Err(ValidationError::TooManyItems {
            field,
            max: max_items,
        });
    }

    values.iter().map(|v| http_url(field, v)).collect()
}

pub fn email(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    if !EmailAddress::is_valid(value) {
        return Err(ValidationError::InvalidEmail(field));
    }

    Ok(value.to_string())
}

/// Trims every entry, drops blanks and exact duplicates, keeps first-seen order.
pub fn string_list(
    field: &'static str,
    values: Vec<String>,
    max_items: usize,
    max_len: usize,
) -> Result<Vec<String>, ValidationError> {
    let too_many = ValidationError::TooManyItems {
        field,
        max: max_items,
    };
    if values.len() > max_items.saturating_mul(RAW_LIST_FACTOR) {
        return Err(too_many);
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(values.len());
    let mut out: Vec<String> = Vec::new();

    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if value.chars().count() > max_len {
            return Err(ValidationError::TooLong {
                field,
                max: max_len,
            });
        }
        if seen.insert(value.to_string()) {
            if out.len() == max_items {
                return Err(too_many);
            }
            out.push(value.to_string());
        }
    }

    Ok(out)
}

/// Same as [`string_list`] but lowercases entries first, so "Rust" and "rust" collapse.
pub fn tags(
    field: &'static str,
    values: Vec<String>,
    max_items: usize,
    max_len: usize,
) -> Result<Vec<String>, ValidationError> {
    string_list(
        field,
        values.into_iter().map(|t| t.trim().to_lowercase()).collect(),
        max_items,
        max_len,
    )
}

/// Rejects an explicit `null` on a column that cannot be cleared.
pub fn not_nullable<T>(field: &'static str, value: &PatchField<T>) -> Result<(), ValidationError> {
    if value.is_null() {
        return Err(ValidationError::invalid(field, "cannot be null"));
    }
    Ok(())
}

/// Patch value for a nullable text column; blank input clears it.
pub fn nullable_text(
    field: &'static str,
    value: PatchField<String>,
    max: usize,
) -> Result<PatchField<String>, ValidationError> {
    match value {
        PatchField::Value(v) if v.trim().is_empty() => Ok(PatchField::Null),
        other => other.try_map(|v| required_text(field, &v, max)),
    }
}

/// Patch value for a nullable URL column; blank input clears it.
pub fn nullable_url(
    field: &'static str,
    value: PatchField<String>,
) -> Result<PatchField<String>, ValidationError> {
    match value {
        PatchField::Value(v) if v.trim().is_empty() => Ok(PatchField::Null),
        other => other.try_map(|v| http_url(field, &v)),
    }
}
