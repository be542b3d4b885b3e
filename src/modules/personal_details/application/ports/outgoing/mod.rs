pub mod personal_details_repository;

pub use personal_details_repository::{PersonalDetailsRepository, PersonalDetailsRepositoryError};
