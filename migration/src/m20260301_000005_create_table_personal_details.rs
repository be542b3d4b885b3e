use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PersonalDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PersonalDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PersonalDetails::FullName).string_len(100).not_null())
                    .col(ColumnDef::new(PersonalDetails::Headline).string_len(150).not_null())
                    .col(ColumnDef::new(PersonalDetails::Bio).text().not_null())
                    .col(ColumnDef::new(PersonalDetails::Email).text().not_null())
                    .col(ColumnDef::new(PersonalDetails::Phone).string_len(30))
                    .col(ColumnDef::new(PersonalDetails::Location).text())
                    .col(ColumnDef::new(PersonalDetails::AvatarUrl).text())
                    .col(ColumnDef::new(PersonalDetails::ResumeUrl).text())
                    .col(
                        ColumnDef::new(PersonalDetails::SocialLinks)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(PersonalDetails::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(PersonalDetails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PersonalDetails::UpdatedAt)
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
                CREATE TRIGGER update_personal_details_updated_at
                BEFORE UPDATE ON personal_details
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
                DROP TRIGGER IF EXISTS update_personal_details_updated_at ON personal_details;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PersonalDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PersonalDetails {
    Table,
    Id,
    FullName,
    Headline,
    Bio,
    Email,
    Phone,
    Location,
    AvatarUrl,
    ResumeUrl,
    SocialLinks,
    Skills,
    CreatedAt,
    UpdatedAt,
}
