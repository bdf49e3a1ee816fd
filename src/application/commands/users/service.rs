// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use crate::domain::{post::PostReadRepository, user::UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) post_read_repo: Arc<dyn PostReadRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            post_read_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }
}
