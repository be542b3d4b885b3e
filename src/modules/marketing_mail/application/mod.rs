pub mod marketing_config;
pub mod marketing_mail_use_cases;
pub mod ports;
pub mod use_cases;
