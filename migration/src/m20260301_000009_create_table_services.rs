use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Services::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Services::Slug).string_len(150).not_null())
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Icon).string_len(100))
                    .col(
                        ColumnDef::new(Services::Features)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Services::StartingPrice).double())
                    .col(ColumnDef::new(Services::DisplayOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(Services::IsActive).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Services::UpdatedAt)
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
                CREATE UNIQUE INDEX IF NOT EXISTS idx_services_slug_unique
                ON services (lower(slug));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_services_display_order
                ON services (display_order, title);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_services_updated_at
                BEFORE UPDATE ON services
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
                DROP TRIGGER IF EXISTS update_services_updated_at ON services;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Icon,
    Features,
    StartingPrice,
    DisplayOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
