pub mod api;
pub mod db_error;
pub mod pagination;
pub mod patch;
pub mod search;
pub mod validation;
