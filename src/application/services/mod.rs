// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, users::UserCommandService},
        ports::{
            security::{PasswordHasher, TokenManager},
            storage::ImageStore,
            time::Clock,
        },
        queries::{posts::PostQueryService, users::UserQueryService},
    },
    domain::{
        post::{PostReadRepository, PostWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
    image_store: Arc<dyn ImageStore>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&image_store),
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&post_read_repo),
        ));

        Self {
            user_commands,
            post_commands,
            post_queries,
            user_queries,
            token_manager,
            image_store,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn image_store(&self) -> Arc<dyn ImageStore> {
        Arc::clone(&self.image_store)
    }
}
