mod seo;

pub use seo::{
    __path_get_seo_handler, delete_seo_handler, get_seo_handler, list_seo_handler,
    upsert_seo_handler, SeoRequest,
};
