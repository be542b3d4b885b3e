use std::sync::Arc;

use crate::modules::ai::application::use_cases::{
    generate_blog_draft::GenerateBlogDraftUseCase, search_web::SearchWebUseCase,
};

#[derive(Clone)]
pub struct AiUseCases {
    pub generate_blog: Arc<dyn GenerateBlogDraftUseCase + Send + Sync>,
    pub search: Arc<dyn SearchWebUseCase + Send + Sync>,
}
