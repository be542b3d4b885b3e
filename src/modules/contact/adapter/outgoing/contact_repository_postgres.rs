use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use crate::modules::contact::domain::entities::{Contact, NewContact};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(&self, data: NewContact) -> Result<Contact, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            subject: Set(data.subject),
            message: Set(data.message),
            is_read: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_contact(inserted))
    }

    async fn list(
        &self,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<PageResult<Contact>, ContactRepositoryError> {
        let mut query = Entity::find();
        if unread_only {
            query = query.filter(Column::IsRead.eq(false));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let items = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_contact)
            .collect();

        Ok(PageResult::new(items, page, total))
    }

    async fn set_read(&self, id: Uuid, is_read: bool) -> Result<Contact, ContactRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        model.is_read = Set(is_read);

        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(to_contact)
            .ok_or(ContactRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_contact(model: Model) -> Contact {
    Contact {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        subject: model.subject,
        message: model.message,
        is_read: model.is_read,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
