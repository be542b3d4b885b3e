pub mod ai_config;
pub mod ai_use_cases;
pub mod ports;
pub mod use_cases;
