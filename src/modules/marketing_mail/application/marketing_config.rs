use std::env;
use std::time::Duration;

pub const DEFAULT_SEND_CONCURRENCY: usize = 10;
pub const DEFAULT_SENDING_TIMEOUT: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Clone)]
pub struct MarketingConfig {
    /// Upper bound on SMTP sends in flight for one campaign.
    pub concurrency: usize,
    /// How long a campaign may stay `sending` before another send can claim it.
    pub sending_timeout: Duration,
}

impl Default for MarketingConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_SEND_CONCURRENCY,
            sending_timeout: DEFAULT_SENDING_TIMEOUT,
        }
    }
}

impl MarketingConfig {
    pub fn from_env() -> Self {
        let concurrency = env::var("MARKETING_MAIL_CONCURRENCY")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_SEND_CONCURRENCY);

        let sending_timeout = env::var("MARKETING_MAIL_SENDING_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SENDING_TIMEOUT);

        Self {
            concurrency,
            sending_timeout,
        }
    }
}
