use crate::email::application::ports::outgoing::{EmailError, EmailSender};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// In-memory sender that records deliveries; selected recipients can be made to fail.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<SentEmail>>>,
    failing_recipients: Arc<HashSet<String>>,
    delay: Option<Duration>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for<I, S>(recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sent_emails: Arc::default(),
            failing_recipients: Arc::new(recipients.into_iter().map(Into::into).collect()),
            delay: None,
        }
    }

    /// Each send waits this long before completing.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent_emails
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing_recipients.contains(to) {
            return Err(EmailError::Transport(format!("mock failure for {to}")));
        }

        if let Ok(mut sent) = self.sent_emails.lock() {
            sent.push(SentEmail {
                to: to.to_string(),
                subject: subject.to_string(),
                html_body: html_body.to_string(),
            });
        }
        Ok(())
    }
}
