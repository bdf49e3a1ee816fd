// src/application/queries/users/profile.rs
use super::UserQueryService;
use crate::application::{
    auth::require_authenticated,
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// The acting user's own profile, with the ids of their posts.
    pub async fn get_self(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<UserDto> {
        let actor = require_authenticated(actor)?;

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let posts = self.post_read_repo.list_ids_by_author(user.id).await?;
        Ok(UserDto::from_parts(user, posts))
    }
}
