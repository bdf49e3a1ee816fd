// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::application::ports::{storage::ImageStore, time::Clock};
use crate::domain::{
    post::{PostReadRepository, PostWriteRepository},
    user::UserRepository,
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) image_store: Arc<dyn ImageStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            image_store,
            clock,
        }
    }
}
