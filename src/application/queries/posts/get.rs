// src/application/queries/posts/get.rs
use super::PostQueryService;
use crate::{
    application::{
        auth::require_authenticated,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct GetPostQuery {
    pub post_id: i64,
}

impl PostQueryService {
    pub async fn get_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPostQuery,
    ) -> ApplicationResult<PostDto> {
        require_authenticated(actor)?;

        let id = PostId::new(query.post_id)?;
        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(record.into())
    }
}
