use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::ad::application::ports::outgoing::{
    AdRepository, AdRepositoryError, PatchAdData,
};
use crate::modules::ad::domain::entities::{Ad, AdPlacement, NewAd};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct AdRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn by_placement(placement: Option<AdPlacement>) -> Select<Entity> {
    let query = Entity::find();
    match placement {
        Some(p) => query.filter(Column::Placement.eq(p.as_str())),
        None => query,
    }
}

#[async_trait]
impl AdRepository for AdRepositoryPostgres {
    async fn create(&self, data: NewAd) -> Result<Ad, AdRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            image_url: Set(data.image_url),
            target_url: Set(data.target_url),
            placement: Set(data.placement.as_str().to_string()),
            is_active: Set(data.is_active),
            starts_at: Set(data.starts_at.map(|t| t.fixed_offset())),
            ends_at: Set(data.ends_at.map(|t| t.fixed_offset())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_ad(inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Ad, AdRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(AdRepositoryError::NotFound)?;

        to_ad(model)
    }

    async fn list(
        &self,
        placement: Option<AdPlacement>,
        page: PageRequest,
    ) -> Result<PageResult<Ad>, AdRepositoryError> {
        let query = by_placement(placement);
        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let items = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_ad)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }

    async fn list_enabled(
        &self,
        placement: Option<AdPlacement>,
    ) -> Result<Vec<Ad>, AdRepositoryError> {
        by_placement(placement)
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_ad)
            .collect()
    }

    async fn patch(&self, id: Uuid, data: PatchAdData) -> Result<Ad, AdRepositoryError> {
        if data.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(url) = data.image_url {
            model.image_url = Set(url);
        }
        if let PatchField::Value(url) = data.target_url {
            model.target_url = Set(url);
        }
        if let PatchField::Value(placement) = data.placement {
            model.placement = Set(placement.as_str().to_string());
        }
        if let PatchField::Value(is_active) = data.is_active {
            model.is_active = Set(is_active);
        }
        match data.description {
            PatchField::Unset => {}
            PatchField::Null => model.description = Set(None),
            PatchField::Value(text) => model.description = Set(Some(text)),
        }
        match data.starts_at {
            PatchField::Unset => {}
            PatchField::Null => model.starts_at = Set(None),
            PatchField::Value(t) => model.starts_at = Set(Some(t.fixed_offset())),
        }
        match data.ends_at {
            PatchField::Unset => {}
            PatchField::Null => model.ends_at = Set(None),
            PatchField::Value(t) => model.ends_at = Set(Some(t.fixed_offset())),
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
            .ok_or(AdRepositoryError::NotFound)?;

        to_ad(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AdRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AdRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_ad(model: Model) -> Result<Ad, AdRepositoryError> {
    let placement = model
        .placement
        .parse::<AdPlacement>()
        .map_err(AdRepositoryError::CorruptRow)?;

    Ok(Ad {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        target_url: model.target_url,
        placement,
        is_active: model.is_active,
        starts_at: model.starts_at.map(Into::into),
        ends_at: model.ends_at.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> AdRepositoryError {
    AdRepositoryError::DatabaseError(e.to_string())
}
