// src/modules/portfolio/adapter/outgoing/portfolio_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::portfolio_repository_postgres::model_to_result;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::{
    self, Column, Entity,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioCard, PortfolioListFilter, PortfolioQuery, PortfolioQueryError, PortfolioView,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::PortfolioRepositoryError;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::search;

#[derive(Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn get_by_id(&self, portfolio_id: Uuid) -> Result<PortfolioView, PortfolioQueryError> {
        let model = Entity::find_by_id(portfolio_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PortfolioQueryError::NotFound)?;

        to_view(model)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<PortfolioView, PortfolioQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        let model = Entity::find()
            .filter(Column::Slug.eq(normalized_slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PortfolioQueryError::NotFound)?;

        to_view(model)
    }

    async fn list(
        &self,
        filter: PortfolioListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PortfolioCard>, PortfolioQueryError> {
        let mut query = Entity::find();

        if let Some(ref term) = filter.search {
            let pattern = search::contains(term);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(Column::Description).ilike(pattern.clone())),
            );
        }

        if let Some(featured) = filter.featured {
            query = query.filter(Column::IsFeatured.eq(featured));
        }

        if let Some(ref category) = filter.category {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(Column::Category)))
                    .eq(category.trim().to_lowercase()),
            );
        }

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

// ============================================================================
// Helper Functions
// ============================================================================

fn to_view(model: portfolios::Model) -> Result<PortfolioView, PortfolioQueryError> {
    model_to_result(model).map_err(|e| match e {
        PortfolioRepositoryError::SerializationError(msg) => {
            PortfolioQueryError::SerializationError(msg)
        }
        other => PortfolioQueryError::DatabaseError(other.to_string()),
    })
}

fn model_to_card(model: portfolios::Model) -> Result<PortfolioCard, PortfolioQueryError> {
    let technologies: Vec<String> = serde_json::from_value(model.technologies)
        .map_err(|e| PortfolioQueryError::SerializationError(e.to_string()))?;

    Ok(PortfolioCard {
        id: model.id,
        title: model.title,
        slug: model.slug,
        category: model.category,
        technologies,
        thumbnail_url: model.thumbnail_url,
        is_featured: model.is_featured,
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::adapter::outgoing::portfolio_repository_postgres::tests::mock_model;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn get_by_slug_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(id, "shop-rewrite")]])
            .into_connection();

        let query = PortfolioQueryPostgres::new(Arc::new(db));
        let view = query.get_by_slug(" Shop-Rewrite ").await.unwrap();

        assert_eq!(view.id, id);
        assert_eq!(view.technologies, vec!["Rust", "Actix"]);
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<portfolios::Model>::new()])
            .into_connection();

        let query = PortfolioQueryPostgres::new(Arc::new(db));

        assert_eq!(
            query.get_by_id(Uuid::new_v4()).await.unwrap_err(),
            PortfolioQueryError::NotFound
        );
    }

    #[tokio::test]
    async fn list_returns_cards_with_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(12)]])
            .append_query_results(vec![vec![
                mock_model(Uuid::new_v4(), "first"),
                mock_model(Uuid::new_v4(), "second"),
            ]])
            .into_connection();

        let query = PortfolioQueryPostgres::new(Arc::new(db));
        let page = PageRequest::new(Some(2), Some(2));
        let result = query
            .list(
                PortfolioListFilter {
                    search: Some("shop".to_string()),
                    featured: Some(true),
                    category: Some("Web".to_string()),
                },
                page,
            )
            .await
            .unwrap();

        assert_eq!(result.total, 12);
        assert_eq!(result.page, 2);
        assert_eq!(result.per_page, 2);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].slug, "first");
    }

    #[tokio::test]
    async fn list_maps_db_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".to_string())])
            .into_connection();

        let query = PortfolioQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query
                .list(PortfolioListFilter::default(), PageRequest::default())
                .await,
            Err(PortfolioQueryError::DatabaseError(_))
        ));
    }
}
