pub mod seo_repository;

pub use seo_repository::{SeoRepository, SeoRepositoryError};
