// src/application/commands/users/status.rs
use super::UserCommandService;
use crate::application::{
    auth::require_authenticated,
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
    validation,
};

pub struct UpdateStatusCommand {
    pub status: String,
}

impl UserCommandService {
    pub async fn update_status(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateStatusCommand,
    ) -> ApplicationResult<UserDto> {
        let actor = require_authenticated(actor)?;
        validation::ensure_valid(validation::validate_status(&command.status))?;

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let updated = self.user_repo.set_status(user.id, &command.status).await?;
        let posts = self.post_read_repo.list_ids_by_author(updated.id).await?;

        Ok(UserDto::from_parts(updated, posts))
    }
}
