use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Could not build message: {0}")]
    Build(String),

    #[error("Delivery failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one HTML email to a single recipient.
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError>;
}
