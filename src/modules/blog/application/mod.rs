pub mod blog_use_cases;
pub mod domain;
pub mod ports;
pub mod service;
