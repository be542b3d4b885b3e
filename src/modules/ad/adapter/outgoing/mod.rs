mod ad_repository_postgres;
pub mod sea_orm_entity;

pub use ad_repository_postgres::AdRepositoryPostgres;
