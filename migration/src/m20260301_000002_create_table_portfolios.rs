use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Portfolios::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Portfolios::Slug).string_len(150).not_null())
                    .col(ColumnDef::new(Portfolios::Description).text().not_null())
                    .col(ColumnDef::new(Portfolios::Category).text())
                    .col(
                        ColumnDef::new(Portfolios::Technologies)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Portfolios::Images)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Portfolios::ThumbnailUrl).text())
                    .col(ColumnDef::new(Portfolios::LiveUrl).text())
                    .col(ColumnDef::new(Portfolios::RepoUrl).text())
                    .col(ColumnDef::new(Portfolios::IsFeatured).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Case-insensitive slug uniqueness
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_portfolios_slug_unique
                ON portfolios (lower(slug));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolios_created_at
                ON portfolios (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolios_updated_at
                BEFORE UPDATE ON portfolios
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
                DROP TRIGGER IF EXISTS update_portfolios_updated_at ON portfolios;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Category,
    Technologies,
    Images,
    ThumbnailUrl,
    LiveUrl,
    RepoUrl,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}
