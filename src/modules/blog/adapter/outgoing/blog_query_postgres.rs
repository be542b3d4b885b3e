// src/modules/blog/adapter/outgoing/blog_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::{PgBinOper, PgExpr};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::blog_repository_postgres::model_to_result;
use crate::modules::blog::adapter::outgoing::sea_orm_entity::blogs::{self, Column, Entity};
use crate::modules::blog::application::domain::entities::BlogStatus;
use crate::modules::blog::application::ports::outgoing::blog_query::{
    BlogCard, BlogListFilter, BlogQuery, BlogQueryError, BlogView,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRepositoryError;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::search;

#[derive(Clone)]
pub struct BlogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogQuery for BlogQueryPostgres {
    async fn get_by_id(&self, blog_id: Uuid) -> Result<BlogView, BlogQueryError> {
        let model = Entity::find_by_id(blog_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        to_view(model)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<BlogView, BlogQueryError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        to_view(model)
    }

    async fn list(
        &self,
        filter: BlogListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BlogCard>, BlogQueryError> {
        let mut query = Entity::find();

        if let Some(ref term) = filter.search {
            let pattern = search::contains(term);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(Column::Excerpt).ilike(pattern.clone()))
                    .add(Expr::col(Column::Content).ilike(pattern.clone())),
            );
        }

        if let Some(ref tag) = filter.tag {
            // tags @> '["tag"]'
            query = query.filter(Expr::col(Column::Tags).binary(
                PgBinOper::Contains,
                Expr::val(serde_json::json!([tag])),
            ));
        }

        query = match filter.status {
            Some(BlogStatus::Published) => query
                .filter(Column::IsPublished.eq(true))
                .order_by_desc(Column::PublishedAt),
            Some(BlogStatus::Draft) => query.filter(Column::IsPublished.eq(false)),
            None => query,
        };

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = models
            .into_iter()
            .map(model_to_card)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }
}

fn to_view(model: blogs::Model) -> Result<BlogView, BlogQueryError> {
    model_to_result(model).map_err(|e| match e {
        BlogRepositoryError::SerializationError(msg) => BlogQueryError::SerializationError(msg),
        other => BlogQueryError::DatabaseError(other.to_string()),
    })
}

fn model_to_card(model: blogs::Model) -> Result<BlogCard, BlogQueryError> {
    let tags: Vec<String> = serde_json::from_value(model.tags)
        .map_err(|e| BlogQueryError::SerializationError(e.to_string()))?;

    Ok(BlogCard {
        id: model.id,
        title: model.title,
        slug: model.slug,
        excerpt: model.excerpt,
        cover_image: model.cover_image,
        tags,
        author: model.author,
        is_published: model.is_published,
        published_at: model.published_at.map(Into::into),
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> BlogQueryError {
    BlogQueryError::DatabaseError(e.to_string())
}
