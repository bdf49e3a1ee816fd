// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Creator, NewPost, Post, PostUpdate, PostWithCreator};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{MIN_CONTENT_LENGTH, MIN_TITLE_LENGTH, PostContent, PostId, PostTitle};
