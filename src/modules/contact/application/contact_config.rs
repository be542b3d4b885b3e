use std::env;

/// Where new contact messages are forwarded. Unset disables the notification.
#[derive(Debug, Clone, Default)]
pub struct ContactConfig {
    pub notify_email: Option<String>,
}

impl ContactConfig {
    pub fn from_env() -> Self {
        let notify_email = env::var("CONTACT_NOTIFY_EMAIL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self { notify_email }
    }
}
