// tests/support/mocks/repos.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use scribe_core::domain::errors::{DomainError, DomainResult};
use scribe_core::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWithCreator, PostWriteRepository,
};
use scribe_core::domain::post::Creator;
use scribe_core::domain::user::{Email, NewUser, User, UserId, UserRepository};

/* -------------------------------- users -------------------------------- */

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<i64, User>>,
    next_id: Mutex<i64>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user directly, bypassing the registration flow.
    pub fn seed(&self, user: User) {
        let id = i64::from(user.id);
        self.inner.lock().unwrap().insert(id, user);
        let mut next = self.next_id.lock().unwrap();
        *next = (*next).max(id);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Err(DomainError::Conflict("email is already registered".into()));
        }

        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let user = User {
            id: UserId::new(*next).expect("invalid generated id"),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            status: new_user.status,
            created_at: new_user.created_at,
        };
        map.insert(*next, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }

    async fn set_status(&self, id: UserId, status: &str) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        let user = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.set_status(status);
        Ok(user.clone())
    }
}

/* -------------------------------- posts -------------------------------- */

/// Backs both the read and write side of the post store. Creator names come
/// from explicit registrations or a linked user repo; unknown authors fall
/// back to a synthetic name.
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
    creators: Mutex<HashMap<i64, String>>,
    users: Mutex<Option<Arc<InMemoryUserRepo>>>,
    next_id: Mutex<i64>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_creator(&self, id: UserId, name: impl Into<String>) {
        self.creators
            .lock()
            .unwrap()
            .insert(i64::from(id), name.into());
    }

    /// Resolve creator names through the given user repo.
    pub fn link_users(&self, users: Arc<InMemoryUserRepo>) {
        *self.users.lock().unwrap() = Some(users);
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| i64::from(p.id) == id)
            .cloned()
    }

    fn creator_for(&self, author_id: UserId) -> Creator {
        let registered = self
            .creators
            .lock()
            .unwrap()
            .get(&i64::from(author_id))
            .cloned();
        let name = registered
            .or_else(|| {
                let users = self.users.lock().unwrap();
                users
                    .as_ref()
                    .and_then(|repo| repo.get(i64::from(author_id)))
                    .map(|user| user.name.to_string())
            })
            .unwrap_or_else(|| format!("user{}", i64::from(author_id)));
        Creator {
            id: author_id,
            name,
        }
    }

    fn sorted_newest_first(&self) -> Vec<Post> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        posts
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostWithCreator>> {
        let post = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned();
        Ok(post.map(|post| {
            let creator = self.creator_for(post.author_id);
            PostWithCreator { post, creator }
        }))
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<Vec<PostWithCreator>> {
        Ok(self
            .sorted_newest_first()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|post| {
                let creator = self.creator_for(post.author_id);
                PostWithCreator { post, creator }
            })
            .collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.posts.lock().unwrap().len() as u64)
    }

    async fn list_ids_by_author(&self, author_id: UserId) -> DomainResult<Vec<i64>> {
        Ok(self
            .sorted_newest_first()
            .into_iter()
            .filter(|p| p.author_id == author_id)
            .map(|p| i64::from(p.id))
            .collect())
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let post = Post {
            id: PostId::new(*next).expect("invalid generated id"),
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.title = update.title;
        post.content = update.content;
        if let Some(image_url) = update.image_url {
            post.image_url = image_url;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}
