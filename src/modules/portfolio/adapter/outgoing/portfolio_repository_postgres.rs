use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    CreatePortfolioData, PatchPortfolioData, PortfolioRepository, PortfolioRepositoryError,
    PortfolioResult,
};
use crate::shared::db_error::is_unique_violation;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn create_portfolio(
        &self,
        data: CreatePortfolioData,
    ) -> Result<PortfolioResult, PortfolioRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            category: Set(data.category),
            technologies: Set(to_json(&data.technologies)?),
            images: Set(to_json(&data.images)?),
            thumbnail_url: Set(data.thumbnail_url),
            live_url: Set(data.live_url),
            repo_url: Set(data.repo_url),
            is_featured: Set(data.is_featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        model_to_result(result)
    }

    async fn patch_portfolio(
        &self,
        portfolio_id: Uuid,
        data: PatchPortfolioData,
    ) -> Result<PortfolioResult, PortfolioRepositoryError> {
        if data.is_empty() {
            let current = Entity::find_by_id(portfolio_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(PortfolioRepositoryError::NotFound)?;

            return model_to_result(current);
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(technologies) = data.technologies {
            model.technologies = Set(to_json(&technologies)?);
        }
        if let PatchField::Value(images) = data.images {
            model.images = Set(to_json(&images)?);
        }
        if let PatchField::Value(is_featured) = data.is_featured {
            model.is_featured = Set(is_featured);
        }

        apply_nullable(&mut model.category, data.category);
        apply_nullable(&mut model.thumbnail_url, data.thumbnail_url);
        apply_nullable(&mut model.live_url, data.live_url);
        apply_nullable(&mut model.repo_url, data.repo_url);

        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(portfolio_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(PortfolioRepositoryError::NotFound)?;

        model_to_result(updated)
    }

    async fn delete_portfolio(&self, portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError> {
        let result = Entity::delete_by_id(portfolio_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_nullable(target: &mut sea_orm::ActiveValue<Option<String>>, value: PatchField<String>) {
    match value {
        PatchField::Unset => {}
        PatchField::Null => *target = Set(None),
        PatchField::Value(v) => *target = Set(Some(v)),
    }
}

pub(super) fn model_to_result(
    model: portfolios::Model,
) -> Result<PortfolioResult, PortfolioRepositoryError> {
    Ok(PortfolioResult {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        category: model.category,
        technologies: from_json(&model.technologies)?,
        images: from_json(&model.images)?,
        thumbnail_url: model.thumbnail_url,
        live_url: model.live_url,
        repo_url: model.repo_url,
        is_featured: model.is_featured,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, PortfolioRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| PortfolioRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, PortfolioRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| PortfolioRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> PortfolioRepositoryError {
    if is_unique_violation(&e, "slug") {
        PortfolioRepositoryError::SlugAlreadyExists
    } else {
        PortfolioRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
