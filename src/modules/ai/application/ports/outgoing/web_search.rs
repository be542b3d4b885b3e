use async_trait::async_trait;

use crate::modules::ai::domain::entities::SearchResult;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WebSearchError {
    #[error("Search is not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(
        &self,
        query: &str,
        max_results: u8,
    ) -> Result<Vec<SearchResult>, WebSearchError>;
}
