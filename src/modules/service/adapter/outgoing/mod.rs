mod offering_repository_postgres;
pub mod sea_orm_entity;

pub use offering_repository_postgres::OfferingRepositoryPostgres;
