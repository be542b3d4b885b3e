use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{truncate_body, PROVIDER_TIMEOUT};
use crate::modules::ai::application::ai_config::TavilyConfig;
use crate::modules::ai::application::ports::outgoing::{WebSearch, WebSearchError};
use crate::modules::ai::domain::entities::SearchResult;

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    max_results: u8,
    search_depth: &'static str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    score: f64,
}

impl From<TavilyResult> for SearchResult {
    fn from(r: TavilyResult) -> Self {
        SearchResult {
            title: r.title,
            url: r.url,
            content: r.content,
            score: r.score,
        }
    }
}

/// Tavily `/search` client.
pub struct TavilyClient {
    client: Client,
    config: TavilyConfig,
}

impl TavilyClient {
    pub fn new(config: TavilyConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(PROVIDER_TIMEOUT).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl WebSearch for TavilyClient {
    async fn search(
        &self,
        query: &str,
        max_results: u8,
    ) -> Result<Vec<SearchResult>, WebSearchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WebSearchError::NotConfigured)?;

        let response = self
            .client
            .post(format!("{}/search", self.config.base_url))
            .bearer_auth(api_key)
            .json(&SearchRequest {
                query,
                max_results,
                search_depth: "basic",
            })
            .send()
            .await
            .map_err(|e| WebSearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Tavily search failed");
            return Err(WebSearchError::Status {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| WebSearchError::Request(e.to_string()))?;

        Ok(parsed.results.into_iter().map(SearchResult::from).collect())
    }
}
