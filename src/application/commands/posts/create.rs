// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        auth::require_authenticated,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        validation,
    },
    domain::post::{Creator, NewPost, PostContent, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = require_authenticated(actor)?;
        validation::ensure_valid(validation::validate_post_input(
            &command.title,
            &command.content,
        ))?;

        // A token can outlive its account; treat a vanished user as an
        // invalid session rather than a missing resource.
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthenticated("invalid user"))?;

        let now = self.clock.now();
        let new_post = NewPost {
            title: PostTitle::new(command.title)?,
            content: PostContent::new(command.content)?,
            image_url: command.image_url,
            author_id: user.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        let creator = Creator {
            id: user.id,
            name: user.name.to_string(),
        };

        Ok(PostDto::from_parts(created, creator))
    }
}
