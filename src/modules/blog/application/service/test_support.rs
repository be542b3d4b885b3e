use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::blog_query::{
    BlogCard, BlogListFilter, BlogQuery, BlogQueryError, BlogView,
};
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogRepository, BlogRepositoryError, BlogResult, CreateBlogData, PatchBlogData,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn sample_blog(is_published: bool) -> BlogResult {
    BlogResult {
        id: Uuid::new_v4(),
        title: "Hello Rust".to_string(),
        slug: "hello-rust".to_string(),
        excerpt: "Ownership".to_string(),
        content: "Ownership is the core idea.".to_string(),
        cover_image: None,
        tags: vec!["rust".to_string()],
        author: "Jane".to_string(),
        is_published,
        published_at: is_published.then(Utc::now),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_create_data() -> CreateBlogData {
    CreateBlogData {
        title: "Hello Rust".to_string(),
        slug: "hello-rust".to_string(),
        excerpt: String::new(),
        content: "Ownership is the core idea.".to_string(),
        cover_image: None,
        tags: vec!["rust".to_string()],
        author: "Jane".to_string(),
        is_published: true,
    }
}

#[derive(Clone)]
pub struct MockBlogRepository {
    pub result: Result<BlogResult, BlogRepositoryError>,
    pub delete_result: Result<(), BlogRepositoryError>,
    pub last_create: Arc<Mutex<Option<CreateBlogData>>>,
    pub last_patch: Arc<Mutex<Option<PatchBlogData>>>,
}

impl MockBlogRepository {
    pub fn returning(result: Result<BlogResult, BlogRepositoryError>) -> Self {
        Self {
            result,
            delete_result: Ok(()),
            last_create: Arc::default(),
            last_patch: Arc::default(),
        }
    }

    pub fn deleting(delete_result: Result<(), BlogRepositoryError>) -> Self {
        Self {
            result: Err(BlogRepositoryError::NotFound),
            delete_result,
            last_create: Arc::default(),
            last_patch: Arc::default(),
        }
    }
}

#[async_trait]
impl BlogRepository for MockBlogRepository {
    async fn create_blog(&self, data: CreateBlogData) -> Result<BlogResult, BlogRepositoryError> {
        *self.last_create.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn patch_blog(
        &self,
        _blog_id: Uuid,
        data: PatchBlogData,
    ) -> Result<BlogResult, BlogRepositoryError> {
        *self.last_patch.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn delete_blog(&self, _blog_id: Uuid) -> Result<(), BlogRepositoryError> {
        self.delete_result.clone()
    }
}

#[derive(Clone)]
pub struct MockBlogQuery {
    pub single: Result<BlogView, BlogQueryError>,
    pub list: Result<PageResult<BlogCard>, BlogQueryError>,
    pub last_filter: Arc<Mutex<Option<BlogListFilter>>>,
}

impl MockBlogQuery {
    pub fn single(single: Result<BlogView, BlogQueryError>) -> Self {
        Self {
            single,
            list: Ok(PageResult::empty(PageRequest::default())),
            last_filter: Arc::default(),
        }
    }

    pub fn list(list: Result<PageResult<BlogCard>, BlogQueryError>) -> Self {
        Self {
            single: Err(BlogQueryError::NotFound),
            list,
            last_filter: Arc::default(),
        }
    }
}

#[async_trait]
impl BlogQuery for MockBlogQuery {
    async fn get_by_id(&self, _blog_id: Uuid) -> Result<BlogView, BlogQueryError> {
        self.single.clone()
    }

    async fn get_by_slug(&self, _slug: &str) -> Result<BlogView, BlogQueryError> {
        self.single.clone()
    }

    async fn list(
        &self,
        filter: BlogListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<BlogCard>, BlogQueryError> {
        *self.last_filter.lock().unwrap() = Some(filter);
        self.list.clone()
    }
}
