use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::email::application::html::escape_html;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 30;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MIN_MESSAGE_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 5000;

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl Contact {
    pub fn notification_subject(&self) -> String {
        match &self.subject {
            Some(subject) => format!("New contact message: {subject}"),
            None => format!("New contact message from {}", self.name),
        }
    }

    /// Owner notification body; every visitor-supplied value is escaped.
    pub fn notification_html(&self) -> String {
        let phone = self
            .phone
            .as_deref()
            .map(|p| format!("<p><strong>Phone:</strong> {}</p>", escape_html(p)))
            .unwrap_or_default();

        format!(
            "<h2>New contact message</h2>\
             <p><strong>From:</strong> {} &lt;{}&gt;</p>\
             {}\
             <p><strong>Subject:</strong> {}</p>\
             <p>{}</p>",
            escape_html(&self.name),
            escape_html(&self.email),
            phone,
            escape_html(self.subject.as_deref().unwrap_or("(none)")),
            escape_html(&self.message).replace('\n', "<br>"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact {
            id: Uuid::new_v4(),
            name: "Eve <script>".to_string(),
            email: "eve@example.com".to_string(),
            phone: None,
            subject: None,
            message: "Line one\nLine two".to_string(),
            is_read: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn notification_escapes_visitor_input() {
        let html = contact().notification_html();

        assert!(html.contains("Eve &lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Line one<br>Line two"));
    }

    #[test]
    fn subject_falls_back_to_sender_name() {
        let mut c = contact();
        assert_eq!(c.notification_subject(), "New contact message from Eve <script>");

        c.subject = Some("Hiring".to_string());
        assert_eq!(c.notification_subject(), "New contact message: Hiring");
    }
}
