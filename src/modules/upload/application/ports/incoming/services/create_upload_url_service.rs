use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::upload::application::{
    domain::{entities::UploadTicket, policies::upload_policy::UploadPolicy},
    ports::{
        incoming::use_cases::{
            make_object_key, CreateUploadUrlCommand, CreateUploadUrlError, CreateUploadUrlUseCase,
        },
        outgoing::ObjectStorage,
    },
};

pub struct CreateUploadUrlService<S>
where
    S: ObjectStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> CreateUploadUrlService<S>
where
    S: ObjectStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl<S> CreateUploadUrlUseCase for CreateUploadUrlService<S>
where
    S: ObjectStorage + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateUploadUrlCommand,
    ) -> Result<UploadTicket, CreateUploadUrlError> {
        let object_name = make_object_key(command.folder(), Uuid::new_v4(), command.ext());

        let upload_url = self
            .storage
            .signed_upload_url(&self.policy.bucket_name, &object_name, self.policy.signed_url_ttl)
            .await
            .map_err(|e| {
                tracing::error!(object_name = %object_name, error = %e, "Failed to sign upload URL");
                CreateUploadUrlError::from(e)
            })?;

        tracing::info!(
            object_name = %object_name,
            mime_type = command.mime_type(),
            size = command.file_size_bytes(),
            "Issued signed upload URL"
        );

        Ok(UploadTicket {
            upload_url,
            public_url: self.policy.public_url(&object_name),
            expires_in_seconds: self.policy.signed_url_ttl.as_secs(),
            object_name,
        })
    }
}
