use std::env;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TAVILY_BASE_URL: &str = "https://api.tavily.com";

fn non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A missing key leaves the client constructed; calls then fail as provider errors.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty("GEMINI_API_KEY"),
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: non_empty("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TavilyConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl TavilyConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty("TAVILY_API_KEY"),
            base_url: non_empty("TAVILY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TAVILY_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}
