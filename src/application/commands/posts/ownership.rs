// src/application/commands/posts/ownership.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;

/// Single ownership comparison for every mutating post operation, always on
/// the normalized creator id.
pub(super) fn ensure_owner(actor: &AuthenticatedUser, creator_id: UserId) -> ApplicationResult<()> {
    if actor.id == creator_id {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("not the creator of this post"))
    }
}
