use async_trait::async_trait;

use crate::modules::service::application::ports::outgoing::OfferingRepository;
use crate::modules::service::domain::entities::{display_cmp, ServiceOffering};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListOfferingsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListOfferingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ServiceOffering>, ListOfferingsError>;
}

/// Lists offerings in display order; the public variant hides inactive ones.
pub struct ListOfferingsService<R>
where
    R: OfferingRepository,
{
    repository: R,
    active_only: bool,
}

impl<R> ListOfferingsService<R>
where
    R: OfferingRepository,
{
    pub fn public(repository: R) -> Self {
        Self {
            repository,
            active_only: true,
        }
    }

    pub fn admin(repository: R) -> Self {
        Self {
            repository,
            active_only: false,
        }
    }
}

#[async_trait]
impl<R> ListOfferingsUseCase for ListOfferingsService<R>
where
    R: OfferingRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ServiceOffering>, ListOfferingsError> {
        let mut offerings = self
            .repository
            .list(self.active_only)
            .await
            .map_err(|e| ListOfferingsError::QueryFailed(e.to_string()))?;

        offerings.sort_by(display_cmp);
        Ok(offerings)
    }
}
