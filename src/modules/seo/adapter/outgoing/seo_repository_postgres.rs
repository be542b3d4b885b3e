use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::seo::application::ports::outgoing::{SeoRepository, SeoRepositoryError};
use crate::modules::seo::domain::entities::{SeoData, SeoEntry};

#[derive(Clone)]
pub struct SeoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SeoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeoRepository for SeoRepositoryPostgres {
    async fn find_by_page(&self, page: &str) -> Result<Option<SeoEntry>, SeoRepositoryError> {
        Entity::find()
            .filter(Column::Page.eq(page))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_entry)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<SeoEntry>, SeoRepositoryError> {
        Entity::find()
            .order_by_asc(Column::Page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_entry)
            .collect()
    }

    async fn upsert(&self, page: &str, data: SeoData) -> Result<SeoEntry, SeoRepositoryError> {
        let now = Utc::now().fixed_offset();

        let keywords = serde_json::to_value(&data.keywords)
            .map_err(|e| SeoRepositoryError::SerializationError(e.to_string()))?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            page: Set(page.to_string()),
            title: Set(data.title),
            description: Set(data.description),
            keywords: Set(keywords),
            og_image: Set(data.og_image),
            canonical_url: Set(data.canonical_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // id and created_at of an existing page are kept.
        let on_conflict = OnConflict::column(Column::Page)
            .update_columns([
                Column::Title,
                Column::Description,
                Column::Keywords,
                Column::OgImage,
                Column::CanonicalUrl,
                Column::UpdatedAt,
            ])
            .to_owned();

        let saved = Entity::insert(model)
            .on_conflict(on_conflict)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_entry(saved)
    }

    async fn delete(&self, page: &str) -> Result<(), SeoRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Page.eq(page))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SeoRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_entry(model: Model) -> Result<SeoEntry, SeoRepositoryError> {
    let keywords = serde_json::from_value(model.keywords)
        .map_err(|e| SeoRepositoryError::SerializationError(e.to_string()))?;

    Ok(SeoEntry {
        id: model.id,
        page: model.page,
        title: model.title,
        description: model.description,
        keywords,
        og_image: model.og_image,
        canonical_url: model.canonical_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> SeoRepositoryError {
    SeoRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(page: &str) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            page: page.to_string(),
            title: "Home".to_string(),
            description: "Welcome".to_string(),
            keywords: serde_json::json!(["rust"]),
            og_image: None,
            canonical_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn upsert_returns_saved_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("home")]])
            .into_connection();

        let saved = SeoRepositoryPostgres::new(Arc::new(db))
            .upsert(
                "home",
                SeoData {
                    title: "Home".to_string(),
                    description: "Welcome".to_string(),
                    keywords: vec!["rust".to_string()],
                    og_image: None,
                    canonical_url: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(saved.page, "home");
        assert_eq!(saved.keywords, vec!["rust".to_string()]);
    }

    #[tokio::test]
    async fn find_missing_page_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        assert_eq!(
            SeoRepositoryPostgres::new(Arc::new(db))
                .find_by_page("blog")
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn delete_missing_page_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        assert_eq!(
            SeoRepositoryPostgres::new(Arc::new(db))
                .delete("blog")
                .await
                .unwrap_err(),
            SeoRepositoryError::NotFound
        );
    }
}
