// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::application::{
    auth::require_authenticated,
    dto::{AuthenticatedUser, PostPageDto},
    error::ApplicationResult,
};

const DEFAULT_PAGE_SIZE: u32 = 3;
const MAX_PAGE_SIZE: u32 = 100;

pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListPostsQuery,
    ) -> ApplicationResult<PostPageDto> {
        require_authenticated(actor)?;

        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let offset = u64::from(page - 1) * u64::from(limit);

        let records = self.read_repo.list_page(offset, limit).await?;
        let total_posts = self.read_repo.count().await?;

        Ok(PostPageDto {
            posts: records.into_iter().map(Into::into).collect(),
            total_posts,
        })
    }
}
