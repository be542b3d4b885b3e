use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_query::{
    PortfolioCard, PortfolioListFilter, PortfolioQuery, PortfolioQueryError, PortfolioView,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_repository::{
    CreatePortfolioData, PatchPortfolioData, PortfolioRepository, PortfolioRepositoryError,
    PortfolioResult,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn sample_portfolio() -> PortfolioResult {
    PortfolioResult {
        id: Uuid::new_v4(),
        title: "Shop Rewrite".to_string(),
        slug: "shop-rewrite".to_string(),
        description: "A storefront".to_string(),
        category: Some("web".to_string()),
        technologies: vec!["Rust".to_string()],
        images: vec![],
        thumbnail_url: None,
        live_url: None,
        repo_url: None,
        is_featured: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_create_data() -> CreatePortfolioData {
    CreatePortfolioData {
        title: "Shop Rewrite".to_string(),
        slug: "shop-rewrite".to_string(),
        description: "A storefront".to_string(),
        category: None,
        technologies: vec!["Rust".to_string()],
        images: vec![],
        thumbnail_url: None,
        live_url: None,
        repo_url: None,
        is_featured: false,
    }
}

/// Repository double returning canned results and recording patch input.
#[derive(Clone)]
pub struct MockPortfolioRepository {
    pub result: Result<PortfolioResult, PortfolioRepositoryError>,
    pub delete_result: Result<(), PortfolioRepositoryError>,
    pub last_patch: Arc<Mutex<Option<PatchPortfolioData>>>,
}

impl MockPortfolioRepository {
    pub fn returning(result: Result<PortfolioResult, PortfolioRepositoryError>) -> Self {
        Self {
            result,
            delete_result: Ok(()),
            last_patch: Arc::default(),
        }
    }

    pub fn deleting(delete_result: Result<(), PortfolioRepositoryError>) -> Self {
        Self {
            result: Err(PortfolioRepositoryError::NotFound),
            delete_result,
            last_patch: Arc::default(),
        }
    }
}

#[async_trait]
impl PortfolioRepository for MockPortfolioRepository {
    async fn create_portfolio(
        &self,
        _data: CreatePortfolioData,
    ) -> Result<PortfolioResult, PortfolioRepositoryError> {
        self.result.clone()
    }

    async fn patch_portfolio(
        &self,
        _portfolio_id: Uuid,
        data: PatchPortfolioData,
    ) -> Result<PortfolioResult, PortfolioRepositoryError> {
        *self.last_patch.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn delete_portfolio(&self, _portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError> {
        self.delete_result.clone()
    }
}

#[derive(Clone)]
pub struct MockPortfolioQuery {
    pub single: Result<PortfolioView, PortfolioQueryError>,
    pub list: Result<PageResult<PortfolioCard>, PortfolioQueryError>,
    pub last_filter: Arc<Mutex<Option<PortfolioListFilter>>>,
}

impl MockPortfolioQuery {
    pub fn single(single: Result<PortfolioView, PortfolioQueryError>) -> Self {
        Self {
            single,
            list: Ok(PageResult::empty(PageRequest::default())),
            last_filter: Arc::default(),
        }
    }

    pub fn list(list: Result<PageResult<PortfolioCard>, PortfolioQueryError>) -> Self {
        Self {
            single: Err(PortfolioQueryError::NotFound),
            list,
            last_filter: Arc::default(),
        }
    }
}

#[async_trait]
impl PortfolioQuery for MockPortfolioQuery {
    async fn get_by_id(&self, _portfolio_id: Uuid) -> Result<PortfolioView, PortfolioQueryError> {
        self.single.clone()
    }

    async fn get_by_slug(&self, _slug: &str) -> Result<PortfolioView, PortfolioQueryError> {
        self.single.clone()
    }

    async fn list(
        &self,
        filter: PortfolioListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<PortfolioCard>, PortfolioQueryError> {
        *self.last_filter.lock().unwrap() = Some(filter);
        self.list.clone()
    }
}
