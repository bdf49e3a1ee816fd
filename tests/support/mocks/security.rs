// tests/support/mocks/security.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Duration;
use scribe_core::application::ApplicationResult;
use scribe_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use scribe_core::application::error::ApplicationError;
use scribe_core::application::ports::security::{PasswordHasher, TokenManager};
use scribe_core::domain::user::UserId;

use super::time::fixed_now;

pub const VALID_TOKEN_PREFIX: &str = "token-for-";

/// The hash this test double produces for a given password.
pub fn hash_for(password: &str) -> String {
    format!("hash::{password}")
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Transparent hasher: `hash::<password>`. Keeps service tests free of the
/// real argon2 cost while still exercising the verify failure path.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(hash_for(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if hash_for(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthenticated("invalid credentials"))
        }
    }
}

/* -------------------------------- TokenManager -------------------------------- */

/// Issues `token-for-<id>` strings and authenticates them back. Counts how
/// many tokens were issued so tests can assert a failed login issued none.
#[derive(Debug, Default)]
pub struct CountingTokenManager {
    issued: AtomicUsize,
}

impl CountingTokenManager {
    pub fn issued_count(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenManager for CountingTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("{VALID_TOKEN_PREFIX}{}", i64::from(subject.user_id)),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let id = token
            .strip_prefix(VALID_TOKEN_PREFIX)
            .and_then(|rest| rest.parse::<i64>().ok())
            .ok_or_else(|| ApplicationError::unauthenticated("invalid token"))?;
        Ok(authenticated_user(id))
    }
}

/// An identity as the auth gate would attach it after token verification.
pub fn authenticated_user(id: i64) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        email: format!("user{id}@example.com"),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}
