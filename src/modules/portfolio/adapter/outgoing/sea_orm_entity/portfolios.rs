use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub category: Option<String>,

    /// JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    /// JSONB array of image URLs
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub repo_url: Option<String>,

    pub is_featured: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            if !_insert {
                self.updated_at = Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}
