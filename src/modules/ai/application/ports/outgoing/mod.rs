pub mod content_generator;
pub mod web_search;

pub use content_generator::{ContentGenerator, ContentGeneratorError};
pub use web_search::{WebSearch, WebSearchError};
