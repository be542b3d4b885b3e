use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blogs::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::blog::application::domain::entities::{derive_excerpt, next_published_at};
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogRepository, BlogRepositoryError, BlogResult, CreateBlogData, PatchBlogData,
};
use crate::shared::db_error::is_unique_violation;
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn create_blog(&self, data: CreateBlogData) -> Result<BlogResult, BlogRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            excerpt: Set(data.excerpt),
            content: Set(data.content),
            cover_image: Set(data.cover_image),
            tags: Set(to_json(&data.tags)?),
            author: Set(data.author),
            is_published: Set(data.is_published),
            published_at: Set(next_published_at(None, data.is_published, Utc::now())
                .map(|t| t.fixed_offset())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        model_to_result(result)
    }

    async fn patch_blog(
        &self,
        blog_id: Uuid,
        data: PatchBlogData,
    ) -> Result<BlogResult, BlogRepositoryError> {
        if data.is_empty() {
            let current = Entity::find_by_id(blog_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(BlogRepositoryError::NotFound)?;

            return model_to_result(current);
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        match data.excerpt {
            PatchField::Unset => {}
            PatchField::Null => {
                let current = Entity::find_by_id(blog_id)
                    .one(&*self.db)
                    .await
                    .map_err(map_db_err)?
                    .ok_or(BlogRepositoryError::NotFound)?;
                model.excerpt = Set(derive_excerpt(&current.content));
            }
            PatchField::Value(excerpt) => model.excerpt = Set(excerpt),
        }
        if let PatchField::Value(content) = data.content {
            model.content = Set(content);
        }
        if let PatchField::Value(tags) = data.tags {
            model.tags = Set(to_json(&tags)?);
        }
        if let PatchField::Value(author) = data.author {
            model.author = Set(author);
        }
        match data.cover_image {
            PatchField::Unset => {}
            PatchField::Null => model.cover_image = Set(None),
            PatchField::Value(url) => model.cover_image = Set(Some(url)),
        }

        let mut publish_stamp = None;
        if let PatchField::Value(is_published) = data.is_published {
            model.is_published = Set(is_published);
            if is_published {
                // Keeps the first publication date on republish.
                publish_stamp = Some(first_publish_expr(Utc::now()));
            } else {
                model.published_at = Set(None);
            }
        }

        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        let mut update = Entity::update_many().set(model);
        if let Some(expr) = publish_stamp {
            update = update.col_expr(Column::PublishedAt, expr);
        }

        let updated = update
            .filter(Column::Id.eq(blog_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(BlogRepositoryError::NotFound)?;

        model_to_result(updated)
    }

    async fn delete_blog(&self, blog_id: Uuid) -> Result<(), BlogRepositoryError> {
        let result = Entity::delete_by_id(blog_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// `COALESCE(published_at, now)`
fn first_publish_expr(now: chrono::DateTime<Utc>) -> SimpleExpr {
    Func::coalesce([
        SimpleExpr::from(Expr::col(Column::PublishedAt)),
        Expr::val(now.fixed_offset()).into(),
    ])
    .into()
}

pub(super) fn model_to_result(model: blogs::Model) -> Result<BlogResult, BlogRepositoryError> {
    Ok(BlogResult {
        id: model.id,
        title: model.title,
        slug: model.slug,
        excerpt: model.excerpt,
        content: model.content,
        cover_image: model.cover_image,
        tags: from_json(&model.tags)?,
        author: model.author,
        is_published: model.is_published,
        published_at: model.published_at.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, BlogRepositoryError> {
    serde_json::to_value(data).map_err(|e| BlogRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, BlogRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| BlogRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> BlogRepositoryError {
    if is_unique_violation(&e, "slug") {
        BlogRepositoryError::SlugAlreadyExists
    } else {
        BlogRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> BlogRepositoryError {
    BlogRepositoryError::DatabaseError(e.to_string())
}
