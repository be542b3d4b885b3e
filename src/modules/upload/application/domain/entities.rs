use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Top-level prefix an uploaded object lands under, one per content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadFolder {
    Portfolio,
    Blog,
    Ads,
    Personal,
    Services,
    Seo,
}

impl UploadFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFolder::Portfolio => "portfolio",
            UploadFolder::Blog => "blog",
            UploadFolder::Ads => "ads",
            UploadFolder::Personal => "personal",
            UploadFolder::Services => "services",
            UploadFolder::Seo => "seo",
        }
    }
}

/// What the admin client needs to PUT the file and later reference it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UploadTicket {
    pub upload_url: String,
    pub public_url: String,
    pub object_name: String,
    pub expires_in_seconds: u64,
}
