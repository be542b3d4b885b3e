pub mod create_ad;
pub mod delete_ad;
pub mod list_active_ads;
pub mod list_ads;
pub mod patch_ad;
