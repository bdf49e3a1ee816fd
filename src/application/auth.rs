// src/application/auth.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

/// The auth gate never blocks a request itself; every resolver that needs an
/// identity goes through this instead.
pub fn require_authenticated(
    actor: Option<&AuthenticatedUser>,
) -> ApplicationResult<&AuthenticatedUser> {
    actor.ok_or_else(|| ApplicationError::unauthenticated("not authenticated"))
}
