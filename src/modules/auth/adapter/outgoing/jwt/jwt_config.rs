use anyhow::{bail, Context};
use std::env;

pub const DEFAULT_AUDIENCE: &str = "authenticated";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 secret of the identity provider project.
    pub secret_key: String,
    pub audience: String,
    pub leeway_seconds: u64,
}

impl JwtConfig {
    /// Load JWT verification settings from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            bail!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let audience = env::var("JWT_AUDIENCE")
            .ok()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

        let leeway_seconds = match env::var("JWT_LEEWAY_SECONDS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid JWT_LEEWAY_SECONDS value: {raw}"))?,
            Err(_) => 30,
        };

        Ok(Self {
            secret_key,
            audience,
            leeway_seconds,
        })
    }
}
