mod manage_ads;
mod public_ads;

pub use manage_ads::{
    create_ad_handler, delete_ad_handler, list_ads_handler, patch_ad_handler, CreateAdRequest,
    PatchAdRequest,
};
pub use public_ads::{__path_list_active_ads_handler, list_active_ads_handler, ActiveAdsQuery};
