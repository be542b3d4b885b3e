mod marketing_mail_repository_postgres;
pub mod sea_orm_entity;

pub use marketing_mail_repository_postgres::MarketingMailRepositoryPostgres;
