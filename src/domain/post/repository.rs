// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::{
    entity::{NewPost, Post, PostUpdate, PostWithCreator},
    value_objects::PostId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostWithCreator>>;

    /// Newest-first page of posts with their creators resolved.
    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<Vec<PostWithCreator>>;

    async fn count(&self) -> DomainResult<u64>;

    /// Ids of the posts owned by a user, newest first.
    async fn list_ids_by_author(&self, author_id: UserId) -> DomainResult<Vec<i64>>;
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;

    async fn delete(&self, id: PostId) -> DomainResult<()>;
}
