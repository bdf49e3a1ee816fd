// src/application/commands/posts/delete.rs
use super::{PostCommandService, ownership::ensure_owner};
use crate::{
    application::{
        auth::require_authenticated,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub post_id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeletePostCommand,
    ) -> ApplicationResult<bool> {
        let actor = require_authenticated(actor)?;

        let id = PostId::new(command.post_id)?;
        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        ensure_owner(actor, record.creator.id)?;

        // Best effort: a stale or missing image never blocks the delete.
        if !record.post.image_url.is_empty() {
            if let Err(err) = self.image_store.remove(&record.post.image_url).await {
                tracing::warn!(error = %err, path = %record.post.image_url, "failed to remove post image");
            }
        }

        self.write_repo.delete(id).await?;
        Ok(true)
    }
}
