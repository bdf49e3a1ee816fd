// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod storage;
pub mod time;

pub use repos::{InMemoryPostRepo, InMemoryUserRepo};
pub use security::{
    CountingTokenManager, DummyPasswordHasher, authenticated_user, hash_for, VALID_TOKEN_PREFIX,
};
pub use storage::RecordingImageStore;
pub use time::{FixedClock, fixed_now};
