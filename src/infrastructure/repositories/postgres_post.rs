// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    Creator, NewPost, Post, PostContent, PostId, PostReadRepository, PostTitle, PostUpdate,
    PostWithCreator, PostWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    image_url: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
            image_url: row.image_url,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostWithCreatorRow {
    id: i64,
    title: String,
    content: String,
    image_url: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
}

impl TryFrom<PostWithCreatorRow> for PostWithCreator {
    type Error = DomainError;

    fn try_from(row: PostWithCreatorRow) -> Result<Self, Self::Error> {
        let author_id = UserId::new(row.author_id)?;
        Ok(PostWithCreator {
            post: Post {
                id: PostId::new(row.id)?,
                title: PostTitle::new(row.title)?,
                content: PostContent::new(row.content)?,
                image_url: row.image_url,
                author_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            creator: Creator {
                id: author_id,
                name: row.author_name,
            },
        })
    }
}

const SELECT_WITH_CREATOR: &str =
    "SELECT p.id, p.title, p.content, p.image_url, p.author_id, p.created_at, p.updated_at,
            u.name AS author_name
     FROM posts p JOIN users u ON u.id = p.author_id";

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            content,
            image_url,
            author_id,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, content, image_url, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, content, image_url, author_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(&image_url)
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            content,
            image_url,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE posts SET title = ");
        builder.push_bind(title.into_inner());
        builder.push(", content = ");
        builder.push_bind(content.into_inner());

        if let Some(image_url) = image_url {
            builder.push(", image_url = ");
            builder.push_bind(image_url);
        }

        builder.push(", updated_at = ");
        builder.push_bind(updated_at);
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder
            .push(" RETURNING id, title, content, image_url, author_id, created_at, updated_at");

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostWithCreator>> {
        let row = sqlx::query_as::<_, PostWithCreatorRow>(&format!(
            "{SELECT_WITH_CREATOR} WHERE p.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PostWithCreator::try_from).transpose()
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<Vec<PostWithCreator>> {
        let rows = sqlx::query_as::<_, PostWithCreatorRow>(&format!(
            "{SELECT_WITH_CREATOR} ORDER BY p.created_at DESC, p.id DESC OFFSET $1 LIMIT $2"
        ))
        .bind(offset as i64)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PostWithCreator::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn list_ids_by_author(&self, author_id: UserId) -> DomainResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>(
            "SELECT id FROM posts WHERE author_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
