use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::modules::upload::application::ports::outgoing::{ObjectStorage, SignUrlError};

/// google-cloud-storage addresses buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_sign_error(msg: &str) -> SignUrlError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        SignUrlError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        SignUrlError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") {
        SignUrlError::Configuration
    } else {
        SignUrlError::Infrastructure
    }
}

/// Seam between the adapter and the SDK so tests can swap in a fake signer.
#[async_trait]
trait GcsSigner: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

#[cfg(test)]
struct ArcGcsSigner(Arc<dyn GcsSigner>);

#[cfg(test)]
#[async_trait]
impl GcsSigner for ArcGcsSigner {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        self.0.sign_put_url(bucket_resource, object_name, ttl).await
    }
}

/// `ObjectStorage` backed by Google Cloud Storage V4 signed URLs.
#[derive(Clone)]
pub struct GcsObjectStorage {
    signer: Arc<OnceCell<Box<dyn GcsSigner>>>,
}

impl Default for GcsObjectStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl GcsObjectStorage {
    /// Credentials are resolved lazily on the first signing request.
    pub fn new() -> Self {
        Self {
            signer: Arc::new(OnceCell::new()),
        }
    }

    async fn get_signer(&self) -> Result<&dyn GcsSigner, SignUrlError> {
        self.signer
            .get_or_try_init(|| async {
                let real = RealGcsSigner::new().map_err(|e| {
                    tracing::error!("Failed to build GCS signer: {:?}", e);
                    SignUrlError::Configuration
                })?;
                Ok(Box::new(real) as Box<dyn GcsSigner>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_signer(signer: Arc<dyn GcsSigner>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsSigner(signer)) as Box<dyn GcsSigner>);

        Self {
            signer: Arc::new(once),
        }
    }
}

#[async_trait]
impl ObjectStorage for GcsObjectStorage {
    async fn signed_upload_url(
        &self,
        bucket_name: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, SignUrlError> {
        let signer = self.get_signer().await?;

        signer
            .sign_put_url(&bucket_resource(bucket_name), object_name, ttl)
            .await
            .map_err(|e| {
                tracing::warn!(bucket = bucket_name, error = %e, "GCS signing failed");
                map_sign_error(&e)
            })
    }
}

struct RealGcsSigner {
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsSigner {
    fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS signer...");

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                if e.to_string().contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }
                e
            })?;

        Ok(Self { signer })
    }
}

#[async_trait]
impl GcsSigner for RealGcsSigner {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())
    }
}
