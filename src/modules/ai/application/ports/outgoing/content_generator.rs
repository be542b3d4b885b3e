use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentGeneratorError {
    #[error("Generator is not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider returned no text")]
    EmptyResponse,
}

/// Port to a generative text model.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Sends `prompt` and returns the model's raw text, expected to be JSON.
    async fn generate_json(&self, prompt: &str) -> Result<String, ContentGeneratorError>;
}
