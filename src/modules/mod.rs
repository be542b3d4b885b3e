pub mod ad;
pub mod ai;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod email;
pub mod marketing_mail;
pub mod personal_details;
pub mod portfolio;
pub mod seo;
pub mod service;
pub mod upload;
