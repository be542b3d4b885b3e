pub mod domain;
pub mod ports;
pub mod upload_use_cases;
