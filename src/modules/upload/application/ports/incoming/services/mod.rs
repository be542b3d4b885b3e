mod create_upload_url_service;

pub use create_upload_url_service::CreateUploadUrlService;
