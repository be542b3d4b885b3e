use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ads::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Ads::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Ads::Description).text())
                    .col(ColumnDef::new(Ads::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Ads::TargetUrl).text().not_null())
                    .col(ColumnDef::new(Ads::Placement).string_len(20).not_null())
                    .col(ColumnDef::new(Ads::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Ads::StartsAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Ads::EndsAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Ads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Ads::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_ads_placement_active
                ON ads (placement, is_active);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE ads ADD CONSTRAINT ads_schedule_order
                CHECK (starts_at IS NULL OR ends_at IS NULL OR ends_at > starts_at);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_ads_updated_at
                BEFORE UPDATE ON ads
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
                DROP TRIGGER IF EXISTS update_ads_updated_at ON ads;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ads {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    TargetUrl,
    Placement,
    IsActive,
    StartsAt,
    EndsAt,
    CreatedAt,
    UpdatedAt,
}
