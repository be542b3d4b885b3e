use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::contact::domain::entities::{
    Contact, NewContact, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, MAX_SUBJECT_LEN,
    MIN_MESSAGE_LEN,
};
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::shared::validation::{self, ValidationError};

/// Raw form input as received from the visitor.
#[derive(Debug, Clone, Default)]
pub struct SubmitContactData {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    data: NewContact,
}

impl SubmitContactCommand {
    pub fn new(raw: SubmitContactData) -> Result<Self, ValidationError> {
        let data = NewContact {
            name: validation::required_text("name", &raw.name, MAX_NAME_LEN)?,
            email: validation::email("email", &raw.email)?,
            phone: validation::optional_text("phone", raw.phone, MAX_PHONE_LEN)?,
            subject: validation::optional_text("subject", raw.subject, MAX_SUBJECT_LEN)?,
            message: validation::text_between(
                "message",
                &raw.message,
                MIN_MESSAGE_LEN,
                MAX_MESSAGE_LEN,
            )?,
        };

        Ok(Self { data })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, command: SubmitContactCommand) -> Result<Contact, SubmitContactError>;
}

/// Stores the message, then forwards it to the site owner.
pub struct SubmitContactService<R>
where
    R: ContactRepository,
{
    repository: R,
    notifier: Arc<dyn EmailSender + Send + Sync>,
    notify_email: Option<String>,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository,
{
    pub fn new(
        repository: R,
        notifier: Arc<dyn EmailSender + Send + Sync>,
        notify_email: Option<String>,
    ) -> Self {
        Self {
            repository,
            notifier,
            notify_email,
        }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, command: SubmitContactCommand) -> Result<Contact, SubmitContactError> {
        let contact = self
            .repository
            .create(command.data)
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        info!(contact_id = %contact.id, "Contact message stored");

        if let Some(ref to) = self.notify_email {
            if let Err(e) = self
                .notifier
                .send_email(to, &contact.notification_subject(), &contact.notification_html())
                .await
            {
                warn!(contact_id = %contact.id, error = %e, "Contact notification failed");
            }
        }

        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::ports::outgoing::ContactRepositoryError;
    use crate::modules::contact::application::use_cases::test_support::{
        contact_from, MockContactRepo,
    };
    use crate::modules::email::adapter::outgoing::MockEmailSender;

    fn raw() -> SubmitContactData {
        SubmitContactData {
            name: " Jane ".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("  ".to_string()),
            subject: Some("Project".to_string()),
            message: "I would like to talk about a project.".to_string(),
        }
    }

    fn storing_repo() -> MockContactRepo {
        let mut repo = MockContactRepo::new();
        repo.expect_create()
            .times(1)
            .returning(|data| Ok(contact_from(data)));
        repo
    }

    #[test]
    fn command_normalises_input() {
        let command = SubmitContactCommand::new(raw()).unwrap();
        assert_eq!(command.data.name, "Jane");
        assert_eq!(command.data.phone, None);
    }

    #[test]
    fn short_message_is_rejected() {
        let mut input = raw();
        input.message = "hi".to_string();
        assert_eq!(
            SubmitContactCommand::new(input).unwrap_err(),
            ValidationError::TooShort {
                field: "message",
                min: MIN_MESSAGE_LEN
            }
        );
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut input = raw();
        input.email = "not-an-email".to_string();
        assert_eq!(
            SubmitContactCommand::new(input).unwrap_err(),
            ValidationError::InvalidEmail("email")
        );
    }

    #[tokio::test]
    async fn stores_and_notifies_owner() {
        let sender = MockEmailSender::new();
        let service = SubmitContactService::new(
            storing_repo(),
            Arc::new(sender.clone()),
            Some("owner@example.com".to_string()),
        );

        let contact = service
            .execute(SubmitContactCommand::new(raw()).unwrap())
            .await
            .unwrap();

        assert_eq!(contact.email, "jane@example.com");
        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].subject, "New contact message: Project");
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_submission() {
        let sender = MockEmailSender::failing_for(["owner@example.com"]);
        let service = SubmitContactService::new(
            storing_repo(),
            Arc::new(sender),
            Some("owner@example.com".to_string()),
        );

        assert!(service
            .execute(SubmitContactCommand::new(raw()).unwrap())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn skips_notification_without_recipient() {
        let sender = MockEmailSender::new();
        let service = SubmitContactService::new(storing_repo(), Arc::new(sender.clone()), None);

        service
            .execute(SubmitContactCommand::new(raw()).unwrap())
            .await
            .unwrap();

        assert!(sender.sent_emails().is_empty());
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let mut repo = MockContactRepo::new();
        repo.expect_create()
            .returning(|_| Err(ContactRepositoryError::DatabaseError("down".to_string())));
        let sender = MockEmailSender::new();
        let service = SubmitContactService::new(repo, Arc::new(sender.clone()), None);

        assert!(matches!(
            service.execute(SubmitContactCommand::new(raw()).unwrap()).await,
            Err(SubmitContactError::RepositoryError(_))
        ));
        assert!(sender.sent_emails().is_empty());
    }
}
