use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogUseCase, DeleteBlogUseCase, GetBlogUseCase, GetBlogsUseCase, GetPublicBlogUseCase,
    PatchBlogUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub create: Arc<dyn CreateBlogUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetBlogsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetBlogUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicBlogUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchBlogUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBlogUseCase + Send + Sync>,
}
