pub mod personal_details_use_cases;
pub mod ports;
pub mod use_cases;
