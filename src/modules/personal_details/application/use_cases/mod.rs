pub mod get_personal_details;
pub mod upsert_personal_details;
