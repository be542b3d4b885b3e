use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogsError, GetBlogsUseCase,
};
use crate::modules::blog::application::ports::outgoing::blog_query::{
    BlogCard, BlogListFilter, BlogQuery,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct GetBlogsService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetBlogsService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogsUseCase for GetBlogsService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        mut filter: BlogListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BlogCard>, GetBlogsError> {
        filter.search = filter
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        filter.tag = filter
            .tag
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());

        self.query
            .list(filter, page)
            .await
            .map_err(GetBlogsError::from)
    }
}
