use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::personal_details::application::ports::outgoing::{
    PersonalDetailsRepository, PersonalDetailsRepositoryError,
};
use crate::modules::personal_details::domain::entities::{
    singleton_id, PersonalDetails, PersonalDetailsData,
};

#[derive(Clone)]
pub struct PersonalDetailsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PersonalDetailsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonalDetailsRepository for PersonalDetailsRepositoryPostgres {
    async fn get(&self) -> Result<Option<PersonalDetails>, PersonalDetailsRepositoryError> {
        Entity::find_by_id(singleton_id())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_details)
            .transpose()
    }

    async fn upsert(
        &self,
        data: PersonalDetailsData,
    ) -> Result<PersonalDetails, PersonalDetailsRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(singleton_id()),
            full_name: Set(data.full_name),
            headline: Set(data.headline),
            bio: Set(data.bio),
            email: Set(data.email),
            phone: Set(data.phone),
            location: Set(data.location),
            avatar_url: Set(data.avatar_url),
            resume_url: Set(data.resume_url),
            social_links: Set(to_json(&data.social_links)?),
            skills: Set(to_json(&data.skills)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // created_at survives the conflict update.
        let on_conflict = OnConflict::column(Column::Id)
            .update_columns([
                Column::FullName,
                Column::Headline,
                Column::Bio,
                Column::Email,
                Column::Phone,
                Column::Location,
                Column::AvatarUrl,
                Column::ResumeUrl,
                Column::SocialLinks,
                Column::Skills,
                Column::UpdatedAt,
            ])
            .to_owned();

        let saved = Entity::insert(model)
            .on_conflict(on_conflict)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_details(saved)
    }
}

fn to_details(model: Model) -> Result<PersonalDetails, PersonalDetailsRepositoryError> {
    Ok(PersonalDetails {
        full_name: model.full_name,
        headline: model.headline,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        avatar_url: model.avatar_url,
        resume_url: model.resume_url,
        social_links: from_json(model.social_links)?,
        skills: from_json(model.skills)?,
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, PersonalDetailsRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| PersonalDetailsRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: serde_json::Value,
) -> Result<T, PersonalDetailsRepositoryError> {
    serde_json::from_value(json)
        .map_err(|e| PersonalDetailsRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> PersonalDetailsRepositoryError {
    PersonalDetailsRepositoryError::DatabaseError(e.to_string())
}
