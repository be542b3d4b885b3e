use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub excerpt: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub cover_image: Option<String>,

    /// JSONB array of lowercase tags
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    #[sea_orm(column_type = "Text")]
    pub author: String,

    pub is_published: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub published_at: Option<DateTimeWithTimeZone>,

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
