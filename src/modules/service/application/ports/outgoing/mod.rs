pub mod offering_repository;

pub use offering_repository::{OfferingRepository, OfferingRepositoryError, PatchOfferingData};
