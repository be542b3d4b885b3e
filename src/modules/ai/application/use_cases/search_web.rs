use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::ai::application::ports::outgoing::WebSearch;
use crate::modules::ai::domain::entities::SearchResult;
use crate::shared::validation::{self, ValidationError};

pub const DEFAULT_MAX_RESULTS: u8 = 5;
pub const MAX_RESULTS_LIMIT: u8 = 10;
pub const MAX_QUERY_LEN: usize = 400;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchWebCommand {
    query: String,
    max_results: u8,
}

impl SearchWebCommand {
    pub fn new(query: &str, max_results: Option<u32>) -> Result<Self, ValidationError> {
        let query = validation::required_text("query", query, MAX_QUERY_LEN)?;

        let max_results = match max_results {
            None => DEFAULT_MAX_RESULTS,
            Some(n) if (1..=MAX_RESULTS_LIMIT as u32).contains(&n) => n as u8,
            Some(_) => {
                return Err(ValidationError::invalid(
                    "max_results",
                    format!("must be between 1 and {}", MAX_RESULTS_LIMIT),
                ))
            }
        };

        Ok(Self { query, max_results })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn max_results(&self) -> u8 {
        self.max_results
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchWebError {
    #[error("Search provider error: {0}")]
    ProviderFailed(String),
}

#[async_trait]
pub trait SearchWebUseCase: Send + Sync {
    async fn execute(&self, command: SearchWebCommand) -> Result<Vec<SearchResult>, SearchWebError>;
}

pub struct SearchWebService {
    search: Arc<dyn WebSearch>,
}

impl SearchWebService {
    pub fn new(search: Arc<dyn WebSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl SearchWebUseCase for SearchWebService {
    async fn execute(&self, command: SearchWebCommand) -> Result<Vec<SearchResult>, SearchWebError> {
        let mut results = self
            .search
            .search(command.query(), command.max_results())
            .await
            .map_err(|e| SearchWebError::ProviderFailed(e.to_string()))?;

        results.truncate(command.max_results() as usize);
        Ok(results)
    }
}
