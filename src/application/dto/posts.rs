// src/application/dto/posts.rs
use crate::domain::post::{Creator, Post, PostWithCreator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorDto {
    pub id: i64,
    pub name: String,
}

impl From<Creator> for CreatorDto {
    fn from(creator: Creator) -> Self {
        Self {
            id: creator.id.into(),
            name: creator.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: CreatorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn from_parts(post: Post, creator: Creator) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            content: post.content.into_inner(),
            image_url: post.image_url,
            creator: creator.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<PostWithCreator> for PostDto {
    fn from(record: PostWithCreator) -> Self {
        Self::from_parts(record.post, record.creator)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPageDto {
    pub posts: Vec<PostDto>,
    pub total_posts: u64,
}
