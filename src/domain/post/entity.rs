// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostContent, PostId, PostTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub image_url: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The post's creator resolved at read time, so views never need a second
/// lookup to show who wrote a post.
#[derive(Debug, Clone)]
pub struct Creator {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct PostWithCreator {
    pub post: Post,
    pub creator: Creator,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
    pub image_url: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}
