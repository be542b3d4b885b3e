pub mod gemini_client;
pub mod tavily_client;

pub use gemini_client::GeminiClient;
pub use tavily_client::TavilyClient;

use std::time::Duration;

/// Outbound provider calls give up after this long.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);

/// Keeps provider error bodies short enough to log.
fn truncate_body(body: String) -> String {
    const MAX: usize = 500;
    if body.chars().count() <= MAX {
        body
    } else {
        body.chars().take(MAX).collect()
    }
}
