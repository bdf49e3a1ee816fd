// src/application/dto/users.rs
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-facing view of a user. Built field-by-field so internal-only data
/// (the password hash in particular) can never leak into a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub status: String,
    pub posts: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn from_parts(user: User, posts: Vec<i64>) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.to_string(),
            name: user.name.to_string(),
            status: user.status,
            posts,
            created_at: user.created_at,
        }
    }
}
