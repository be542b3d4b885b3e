use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::marketing_mail::application::ports::outgoing::{
    CampaignOutcome, MarketingMailRepository, MarketingMailRepositoryError,
};
use crate::modules::marketing_mail::domain::entities::{
    CampaignStatus, MarketingMail, NewMarketingMail,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct MarketingMailRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MarketingMailRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> Result<Option<Model>, MarketingMailRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }

    /// Explains why a conditional write touched no row.
    async fn rejection(&self, id: Uuid) -> MarketingMailRepositoryError {
        match self.find_model(id).await {
            Ok(None) => MarketingMailRepositoryError::NotFound,
            Ok(Some(model)) => match parse_status(&model.status) {
                Ok(status) => MarketingMailRepositoryError::InvalidState(status),
                Err(e) => e,
            },
            Err(e) => e,
        }
    }
}

#[async_trait]
impl MarketingMailRepository for MarketingMailRepositoryPostgres {
    async fn create(
        &self,
        data: NewMarketingMail,
    ) -> Result<MarketingMail, MarketingMailRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            subject: Set(data.subject),
            html_body: Set(data.html_body),
            recipients: Set(serde_json::json!(data.recipients)),
            status: Set(CampaignStatus::Draft.as_str().to_string()),
            sent_count: Set(0),
            failed_count: Set(0),
            sent_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_campaign(inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<MarketingMail, MarketingMailRepositoryError> {
        self.find_model(id)
            .await?
            .ok_or(MarketingMailRepositoryError::NotFound)
            .and_then(to_campaign)
    }

    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<MarketingMail>, MarketingMailRepositoryError> {
        let total = Entity::find().count(&*self.db).await.map_err(map_db_err)?;

        let items = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_campaign)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }

    async fn claim_for_sending(
        &self,
        id: Uuid,
        stale_before: DateTime<Utc>,
    ) -> Result<MarketingMail, MarketingMailRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        model.status = Set(CampaignStatus::Sending.as_str().to_string());
        model.updated_at = Set(Utc::now().fixed_offset());

        let claimable = Condition::any()
            .add(Column::Status.is_in([
                CampaignStatus::Draft.as_str(),
                CampaignStatus::Failed.as_str(),
            ]))
            .add(
                Condition::all()
                    .add(Column::Status.eq(CampaignStatus::Sending.as_str()))
                    .add(Column::UpdatedAt.lt(stale_before.fixed_offset())),
            );

        let claimed = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .filter(claimable)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next();

        match claimed {
            Some(model) => to_campaign(model),
            None => Err(self.rejection(id).await),
        }
    }

    async fn record_outcome(
        &self,
        id: Uuid,
        outcome: CampaignOutcome,
    ) -> Result<MarketingMail, MarketingMailRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        model.status = Set(outcome.status.as_str().to_string());
        model.sent_count = Set(outcome.sent_count);
        model.failed_count = Set(outcome.failed_count);
        model.sent_at = Set(outcome.sent_at.map(|t| t.fixed_offset()));

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
            .ok_or(MarketingMailRepositoryError::NotFound)
            .and_then(to_campaign)
    }

    async fn delete(&self, id: Uuid) -> Result<(), MarketingMailRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::Status.ne(CampaignStatus::Sending.as_str()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(self.rejection(id).await);
        }
        Ok(())
    }
}

fn parse_status(raw: &str) -> Result<CampaignStatus, MarketingMailRepositoryError> {
    raw.parse::<CampaignStatus>()
        .map_err(MarketingMailRepositoryError::CorruptRow)
}

fn to_campaign(model: Model) -> Result<MarketingMail, MarketingMailRepositoryError> {
    let recipients: Vec<String> = serde_json::from_value(model.recipients)
        .map_err(|e| MarketingMailRepositoryError::CorruptRow(e.to_string()))?;

    Ok(MarketingMail {
        id: model.id,
        subject: model.subject,
        html_body: model.html_body,
        recipients,
        status: parse_status(&model.status)?,
        sent_count: model.sent_count,
        failed_count: model.failed_count,
        sent_at: model.sent_at.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> MarketingMailRepositoryError {
    MarketingMailRepositoryError::DatabaseError(e.to_string())
}
