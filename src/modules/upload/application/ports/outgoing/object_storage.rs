use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SignUrlError {
    #[error("Infrastructure error occurred")]
    Infrastructure,

    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Invalid configuration")]
    Configuration,
}

/// Port for handing out direct-to-bucket upload URLs.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Returns a V4 signed URL that accepts one PUT of `object_name` until `ttl` elapses.
    async fn signed_upload_url(
        &self,
        bucket_name: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, SignUrlError>;
}
