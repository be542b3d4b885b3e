pub mod sea_orm_entity;
mod seo_repository_postgres;

pub use seo_repository_postgres::SeoRepositoryPostgres;
