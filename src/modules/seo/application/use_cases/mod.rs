pub mod delete_seo;
pub mod get_seo;
pub mod list_seo;
pub mod upsert_seo;
