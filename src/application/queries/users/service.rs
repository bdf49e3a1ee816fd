// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::domain::{post::PostReadRepository, user::UserRepository};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) post_read_repo: Arc<dyn PostReadRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            user_repo,
            post_read_repo,
        }
    }
}
