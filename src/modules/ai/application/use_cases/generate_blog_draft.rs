use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::ai::application::ports::outgoing::{ContentGenerator, WebSearch};
use crate::modules::ai::domain::entities::{BlogDraft, SearchResult};
use crate::shared::validation::{self, ValidationError};

pub const MAX_TOPIC_LEN: usize = 300;
pub const MAX_TONE_LEN: usize = 50;
pub const MAX_KEYWORDS: usize = 10;
pub const MAX_KEYWORD_LEN: usize = 50;
/// Sources fetched when research mode is on.
pub const RESEARCH_RESULTS: u8 = 5;

#[derive(Debug, Clone, Default)]
pub struct GenerateBlogData {
    pub topic: String,
    pub tone: Option<String>,
    pub keywords: Vec<String>,
    pub research: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateBlogCommand {
    topic: String,
    tone: Option<String>,
    keywords: Vec<String>,
    research: bool,
}

impl GenerateBlogCommand {
    pub fn new(raw: GenerateBlogData) -> Result<Self, GenerateBlogError> {
        if raw.topic.trim().is_empty() {
            return Err(GenerateBlogError::EmptyTopic);
        }

        Ok(Self {
            topic: validation::required_text("topic", &raw.topic, MAX_TOPIC_LEN)?,
            tone: validation::optional_text("tone", raw.tone, MAX_TONE_LEN)?,
            keywords: validation::string_list("keywords", raw.keywords, MAX_KEYWORDS, MAX_KEYWORD_LEN)?,
            research: raw.research,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn research(&self) -> bool {
        self.research
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateBlogError {
    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Search provider error: {0}")]
    SearchFailed(String),

    #[error("AI provider error: {0}")]
    ProviderFailed(String),

    #[error("AI returned an unusable draft: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait GenerateBlogDraftUseCase: Send + Sync {
    async fn execute(&self, command: GenerateBlogCommand) -> Result<BlogDraft, GenerateBlogError>;
}

pub(crate) fn build_prompt(command: &GenerateBlogCommand, sources: &[SearchResult]) -> String {
    let mut prompt = format!(
        "You are writing a blog post for a personal portfolio site.\n\
         Topic: {}\n\
         Tone: {}\n",
        command.topic,
        command.tone.as_deref().unwrap_or("informative"),
    );

    if !command.keywords.is_empty() {
        prompt.push_str(&format!("Work in these keywords: {}\n", command.keywords.join(", ")));
    }

    if !sources.is_empty() {
        prompt.push_str("\nUse the following research notes and cite the URLs where relevant:\n");
        for (i, source) in sources.iter().enumerate() {
            prompt.push_str(&format!(
                "[{}] {} ({})\n{}\n",
                i + 1,
                source.title,
                source.url,
                source.content
            ));
        }
    }

    prompt.push_str(
        "\nRespond with a single JSON object with the keys \"title\", \"excerpt\", \
         \"content\" (markdown) and \"tags\" (array of short lowercase strings). \
         Do not add any text outside the JSON object.",
    );
    prompt
}

/// Builds a draft from the model, optionally grounded on web search results.
/// The draft is returned to the caller and never stored.
pub struct GenerateBlogDraftService {
    generator: Arc<dyn ContentGenerator>,
    search: Arc<dyn WebSearch>,
}

impl GenerateBlogDraftService {
    pub fn new(generator: Arc<dyn ContentGenerator>, search: Arc<dyn WebSearch>) -> Self {
        Self { generator, search }
    }
}

#[async_trait]
impl GenerateBlogDraftUseCase for GenerateBlogDraftService {
    async fn execute(&self, command: GenerateBlogCommand) -> Result<BlogDraft, GenerateBlogError> {
        let sources = if command.research() {
            let mut results = self
                .search
                .search(command.topic(), RESEARCH_RESULTS)
                .await
                .map_err(|e| GenerateBlogError::SearchFailed(e.to_string()))?;
            results.truncate(RESEARCH_RESULTS as usize);
            results
        } else {
            Vec::new()
        };

        let prompt = build_prompt(&command, &sources);
        let raw = self
            .generator
            .generate_json(&prompt)
            .await
            .map_err(|e| GenerateBlogError::ProviderFailed(e.to_string()))?;

        let draft = BlogDraft::from_model_output(&raw).map_err(|e| {
            warn!(topic = command.topic(), "Unusable model output: {}", e);
            GenerateBlogError::InvalidResponse(e)
        })?;

        info!(
            topic = command.topic(),
            sources = sources.len(),
            "Generated blog draft"
        );
        Ok(draft)
    }
}
