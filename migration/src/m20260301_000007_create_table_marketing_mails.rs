use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketingMails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MarketingMails::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(MarketingMails::Subject).string_len(200).not_null())
                    .col(ColumnDef::new(MarketingMails::HtmlBody).text().not_null())
                    .col(ColumnDef::new(MarketingMails::Recipients).json_binary().not_null())
                    .col(
                        ColumnDef::new(MarketingMails::Status)
                            .string_len(20)
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(MarketingMails::SentCount).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(MarketingMails::FailedCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(MarketingMails::SentAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(MarketingMails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MarketingMails::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_marketing_mails_status
                ON marketing_mails (status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_marketing_mails_updated_at
                BEFORE UPDATE ON marketing_mails
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
                DROP TRIGGER IF EXISTS update_marketing_mails_updated_at ON marketing_mails;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MarketingMails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MarketingMails {
    Table,
    Id,
    Subject,
    HtmlBody,
    Recipients,
    Status,
    SentCount,
    FailedCount,
    SentAt,
    CreatedAt,
    UpdatedAt,
}
