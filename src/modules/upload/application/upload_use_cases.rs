use std::sync::Arc;

use crate::modules::upload::application::{
    domain::policies::upload_policy::UploadPolicy,
    ports::incoming::use_cases::CreateUploadUrlUseCase,
};

#[derive(Clone)]
pub struct UploadUseCases {
    pub create_upload_url: Arc<dyn CreateUploadUrlUseCase + Send + Sync>,
    /// Used by the handler to validate requests before the use case runs.
    pub policy: UploadPolicy,
}
