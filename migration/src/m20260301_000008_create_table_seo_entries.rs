use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeoEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeoEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SeoEntries::Page).string_len(150).not_null().unique_key())
                    .col(ColumnDef::new(SeoEntries::Title).string_len(70).not_null())
                    .col(ColumnDef::new(SeoEntries::Description).string_len(160).not_null())
                    .col(
                        ColumnDef::new(SeoEntries::Keywords)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(SeoEntries::OgImage).text())
                    .col(ColumnDef::new(SeoEntries::CanonicalUrl).text())
                    .col(
                        ColumnDef::new(SeoEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SeoEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_seo_entries_updated_at
                BEFORE UPDATE ON seo_entries
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_seo_entries_updated_at ON seo_entries;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeoEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SeoEntries {
    Table,
    Id,
    Page,
    Title,
    Description,
    Keywords,
    OgImage,
    CanonicalUrl,
    CreatedAt,
    UpdatedAt,
}
