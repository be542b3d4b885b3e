use std::time::Duration;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
    pub bucket_name: String,
    /// Base that object names are appended to when building the public URL.
    pub public_base_url: String,
    pub signed_url_ttl: Duration,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "cms-uploads";
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];
    pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
    pub const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

    /// Reads `UPLOAD_BUCKET` and `UPLOAD_PUBLIC_BASE_URL`.
    pub fn from_env() -> Self {
        let bucket_name = std::env::var("UPLOAD_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BUCKET_NAME.to_string());

        let public_base_url = std::env::var("UPLOAD_PUBLIC_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self::with_base_url(bucket_name, public_base_url)
    }

    /// No env reads; the public base defaults to the bucket's storage.googleapis.com URL.
    pub fn new(bucket_name: String) -> Self {
        Self::with_base_url(bucket_name, None)
    }

    fn with_base_url(bucket_name: String, public_base_url: Option<String>) -> Self {
        let public_base_url = public_base_url
            .unwrap_or_else(|| format!("https://storage.googleapis.com/{}", bucket_name))
            .trim_end_matches('/')
            .to_string();

        Self {
            max_file_size_bytes: Self::MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            bucket_name,
            public_base_url,
            signed_url_ttl: Self::SIGNED_URL_TTL,
        }
    }

    pub fn public_url(&self, object_name: &str) -> String {
        format!("{}/{}", self.public_base_url, object_name)
    }
}
