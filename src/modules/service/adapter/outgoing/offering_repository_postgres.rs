use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::service::application::ports::outgoing::{
    OfferingRepository, OfferingRepositoryError, PatchOfferingData,
};
use crate::modules::service::domain::entities::{NewServiceOffering, ServiceOffering};
use crate::shared::db_error::is_unique_violation;
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct OfferingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OfferingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OfferingRepository for OfferingRepositoryPostgres {
    async fn create(
        &self,
        data: NewServiceOffering,
    ) -> Result<ServiceOffering, OfferingRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            icon: Set(data.icon),
            features: Set(to_json(&data.features)?),
            starting_price: Set(data.starting_price),
            display_order: Set(data.display_order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_slug_error)?;
        to_offering(inserted)
    }

    async fn list(&self, active_only: bool) -> Result<Vec<ServiceOffering>, OfferingRepositoryError> {
        let mut query = Entity::find();
        if active_only {
            query = query.filter(Column::IsActive.eq(true));
        }

        query
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Title)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_offering)
            .collect()
    }

    async fn patch(
        &self,
        id: Uuid,
        data: PatchOfferingData,
    ) -> Result<ServiceOffering, OfferingRepositoryError> {
        if data.is_empty() {
            let current = Entity::find_by_id(id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(OfferingRepositoryError::NotFound)?;
            return to_offering(current);
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(features) = data.features {
            model.features = Set(to_json(&features)?);
        }
        if let PatchField::Value(order) = data.display_order {
            model.display_order = Set(order);
        }
        if let PatchField::Value(is_active) = data.is_active {
            model.is_active = Set(is_active);
        }
        match data.icon {
            PatchField::Unset => {}
            PatchField::Null => model.icon = Set(None),
            PatchField::Value(icon) => model.icon = Set(Some(icon)),
        }
        match data.starting_price {
            PatchField::Unset => {}
            PatchField::Null => model.starting_price = Set(None),
            PatchField::Value(price) => model.starting_price = Set(Some(price)),
        }

        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(OfferingRepositoryError::NotFound)?;

        to_offering(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), OfferingRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(OfferingRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_offering(model: Model) -> Result<ServiceOffering, OfferingRepositoryError> {
    let features = serde_json::from_value(model.features)
        .map_err(|e| OfferingRepositoryError::SerializationError(e.to_string()))?;

    Ok(ServiceOffering {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        icon: model.icon,
        features,
        starting_price: model.starting_price,
        display_order: model.display_order,
        is_active: model.is_active,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json(features: &[String]) -> Result<serde_json::Value, OfferingRepositoryError> {
    serde_json::to_value(features)
        .map_err(|e| OfferingRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> OfferingRepositoryError {
    if is_unique_violation(&e, "slug") {
        OfferingRepositoryError::SlugAlreadyExists
    } else {
        OfferingRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> OfferingRepositoryError {
    OfferingRepositoryError::DatabaseError(e.to_string())
}
