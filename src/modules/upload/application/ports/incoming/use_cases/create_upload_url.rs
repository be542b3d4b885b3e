use async_trait::async_trait;
use std::path::Path;
use uuid::Uuid;

use crate::modules::upload::application::{
    domain::{
        entities::{UploadFolder, UploadTicket},
        policies::upload_policy::UploadPolicy,
    },
    ports::outgoing::SignUrlError,
};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadUrlCommandError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid file name")]
    InvalidFileName,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Invalid mime type: {0}")]
    InvalidMimeType(String),

    #[error("Invalid file extension: {0}")]
    InvalidExtension(String),

    #[error("Mime type does not match file extension (mime={mime_type}, ext={ext})")]
    MimeExtensionMismatch { mime_type: String, ext: String },
}

fn sanitize_basename(file_name: &str, max_len: usize) -> Result<String, UploadUrlCommandError> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or(UploadUrlCommandError::InvalidFileName)?;

    if base.is_empty() || base.len() > max_len {
        return Err(UploadUrlCommandError::InvalidFileName);
    }

    // Path-like input has a basename that differs from the raw value.
    if base != file_name || base.contains('\\') {
        return Err(UploadUrlCommandError::InvalidFileName);
    }

    if base.chars().any(|c| c.is_control()) {
        return Err(UploadUrlCommandError::InvalidFileName);
    }

    Ok(base.to_string())
}

fn ext_lower(file_name: &str) -> Result<String, UploadUrlCommandError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .trim();

    if ext.is_empty() {
        return Err(UploadUrlCommandError::InvalidExtension(String::new()));
    }

    Ok(ext.to_ascii_lowercase())
}

fn validate_mime(mime_type: &str, allowed: &[&str]) -> Result<(), UploadUrlCommandError> {
    if !allowed.contains(&mime_type) {
        return Err(UploadUrlCommandError::InvalidMimeType(
            mime_type.to_string(),
        ));
    }
    Ok(())
}

fn validate_ext(ext: &str) -> Result<(), UploadUrlCommandError> {
    match ext {
        "jpg" | "jpeg" | "png" | "webp" | "gif" => Ok(()),
        other => Err(UploadUrlCommandError::InvalidExtension(other.to_string())),
    }
}

fn validate_mime_ext_match(mime: &str, ext: &str) -> Result<(), UploadUrlCommandError> {
    let ok = match mime {
        "image/jpeg" => matches!(ext, "jpg" | "jpeg"),
        "image/png" => ext == "png",
        "image/webp" => ext == "webp",
        "image/gif" => ext == "gif",
        _ => false,
    };

    if !ok {
        return Err(UploadUrlCommandError::MimeExtensionMismatch {
            mime_type: mime.to_string(),
            ext: ext.to_string(),
        });
    }
    Ok(())
}

/// Object names are `<folder>/<uuid>.<ext>`; nothing from the client's file name
/// except the validated extension reaches the bucket path.
pub fn make_object_key(folder: UploadFolder, id: Uuid, ext: &str) -> String {
    format!("{}/{}.{}", folder.as_str(), id, ext)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUploadUrlCommand {
    folder: UploadFolder,
    file_name: String,
    ext: String,
    mime_type: String,
    file_size_bytes: u64,
}

impl CreateUploadUrlCommand {
    /// Validates the request against `policy`. Rules run in order: file name,
    /// extension, mime allowlist, mime/extension agreement, size.
    pub fn new(
        folder: UploadFolder,
        file_name: String,
        mime_type: String,
        file_size_bytes: u64,
        policy: &UploadPolicy,
    ) -> Result<Self, UploadUrlCommandError> {
        let file_name = file_name.trim().to_string();
        if file_name.is_empty() {
            return Err(UploadUrlCommandError::MissingField("file_name"));
        }
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if mime_type.is_empty() {
            return Err(UploadUrlCommandError::MissingField("mime_type"));
        }

        let safe_name = sanitize_basename(&file_name, policy.max_file_name_len)?;
        let ext = ext_lower(&safe_name)?;
        validate_ext(&ext)?;

        validate_mime(&mime_type, policy.allowed_mime_types)?;
        validate_mime_ext_match(&mime_type, &ext)?;

        if file_size_bytes == 0 {
            return Err(UploadUrlCommandError::MissingField("file_size_bytes"));
        }
        if file_size_bytes > policy.max_file_size_bytes {
            return Err(UploadUrlCommandError::FileTooLarge {
                max_bytes: policy.max_file_size_bytes,
                actual_bytes: file_size_bytes,
            });
        }

        Ok(Self {
            folder,
            file_name: safe_name,
            ext,
            mime_type,
            file_size_bytes,
        })
    }

    pub fn folder(&self) -> UploadFolder {
        self.folder
    }
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
    pub fn ext(&self) -> &str {
        &self.ext
    }
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
    pub fn file_size_bytes(&self) -> u64 {
        self.file_size_bytes
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CreateUploadUrlError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<SignUrlError> for CreateUploadUrlError {
    fn from(error: SignUrlError) -> Self {
        CreateUploadUrlError::StorageError(error.to_string())
    }
}

#[async_trait]
pub trait CreateUploadUrlUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateUploadUrlCommand,
    ) -> Result<UploadTicket, CreateUploadUrlError>;
}
