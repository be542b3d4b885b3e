mod create_upload_url;

pub use create_upload_url::{
    make_object_key, CreateUploadUrlCommand, CreateUploadUrlError, CreateUploadUrlUseCase,
    UploadUrlCommandError,
};
