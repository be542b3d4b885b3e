use anyhow::Context;
use std::env;

/// How the SMTP transport connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpMode {
    /// Authenticated TLS relay, e.g. `smtp.resend.com`.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher such as Mailpit.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub from_email: String,
    pub mode: SmtpMode,
}

impl SmtpConfig {
    /// `RUST_ENV=test` selects the local mode (`SMTP_HOST`, `SMTP_PORT`),
    /// anything else needs `SMTP_SERVER`, `SMTP_USERNAME` and `SMTP_PASSWORD`.
    pub fn from_env() -> anyhow::Result<Self> {
        let from_email = env::var("EMAIL_FROM").context("EMAIL_FROM not set")?;

        let mode = if env::var("RUST_ENV").as_deref() == Ok("test") {
            let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("SMTP_PORT")
                .unwrap_or_else(|_| "1025".to_string())
                .parse::<u16>()
                .context("Invalid SMTP_PORT")?;
            SmtpMode::Local { host, port }
        } else {
            SmtpMode::Relay {
                server: env::var("SMTP_SERVER").context("SMTP_SERVER not set")?,
                username: env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?,
                password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?,
            }
        };

        Ok(Self { from_email, mode })
    }
}
