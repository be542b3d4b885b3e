use serde::{Deserialize, Serialize};

pub const MAX_DRAFT_TAGS: usize = 10;

/// Unsaved blog post proposed by the generative model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
struct RawDraft {
    title: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    content: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Models sometimes wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

impl BlogDraft {
    /// Parses model output into a draft. Title and content must be present;
    /// tags are lowercased, de-duplicated and capped.
    pub fn from_model_output(raw: &str) -> Result<Self, String> {
        let parsed: RawDraft = serde_json::from_str(strip_code_fence(raw))
            .map_err(|e| format!("draft is not valid JSON: {}", e))?;

        let title = parsed
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| "draft has no title".to_string())?;
        let content = parsed
            .content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| "draft has no content".to_string())?;

        let mut tags: Vec<String> = Vec::new();
        for tag in parsed.tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags.truncate(MAX_DRAFT_TAGS);

        Ok(Self {
            title,
            excerpt: parsed.excerpt.unwrap_or_default().trim().to_string(),
            content,
            tags,
        })
    }
}
