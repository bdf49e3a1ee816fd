// src/application/commands/posts/update.rs
use super::{PostCommandService, ownership::ensure_owner};
use crate::{
    application::{
        auth::require_authenticated,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        validation::{self, IMAGE_URL_PLACEHOLDER},
    },
    domain::post::{PostContent, PostId, PostTitle, PostUpdate},
};

pub struct UpdatePostCommand {
    pub post_id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = require_authenticated(actor)?;

        let id = PostId::new(command.post_id)?;
        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        ensure_owner(actor, record.creator.id)?;

        validation::ensure_valid(validation::validate_post_input(
            &command.title,
            &command.content,
        ))?;

        // The "undefined" literal marks an untouched image field and must
        // not clobber the stored URL.
        let image_url = command
            .image_url
            .filter(|value| value != IMAGE_URL_PLACEHOLDER);

        let update = PostUpdate {
            id,
            title: PostTitle::new(command.title)?,
            content: PostContent::new(command.content)?,
            image_url,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        Ok(PostDto::from_parts(updated, record.creator))
    }
}
