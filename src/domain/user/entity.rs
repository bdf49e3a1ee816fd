// src/domain/user/entity.rs
use crate::domain::user::value_objects::{DisplayName, Email, PasswordHash, UserId};
use chrono::{DateTime, Utc};

/// Status line every freshly registered account starts with.
pub const DEFAULT_STATUS: &str = "I am new!";

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: DisplayName,
    pub password_hash: PasswordHash,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: DisplayName,
    pub password_hash: PasswordHash,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: Email,
        name: DisplayName,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            name,
            password_hash,
            status: DEFAULT_STATUS.into(),
            created_at,
        }
    }
}
