mod personal_details_repository_postgres;
pub mod sea_orm_entity;

pub use personal_details_repository_postgres::PersonalDetailsRepositoryPostgres;
