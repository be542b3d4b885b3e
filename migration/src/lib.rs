pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_updated_at_function;
mod m20260301_000002_create_table_portfolios;
mod m20260301_000003_create_table_blogs;
mod m20260301_000004_create_table_contacts;
mod m20260301_000005_create_table_personal_details;
mod m20260301_000006_create_table_ads;
mod m20260301_000007_create_table_marketing_mails;
mod m20260301_000008_create_table_seo_entries;
mod m20260301_000009_create_table_services;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_updated_at_function::Migration),
            Box::new(m20260301_000002_create_table_portfolios::Migration),
            Box::new(m20260301_000003_create_table_blogs::Migration),
            Box::new(m20260301_000004_create_table_contacts::Migration),
            Box::new(m20260301_000005_create_table_personal_details::Migration),
            Box::new(m20260301_000006_create_table_ads::Migration),
            Box::new(m20260301_000007_create_table_marketing_mails::Migration),
            Box::new(m20260301_000008_create_table_seo_entries::Migration),
            Box::new(m20260301_000009_create_table_services::Migration),
        ]
    }
}
