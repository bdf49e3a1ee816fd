// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Storage for uploaded post images. Paths are relative (e.g.
/// `images/<name>`) and double as the public URL of the stored file.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist the bytes under a generated unique name and return its path.
    async fn store(&self, bytes: Vec<u8>) -> ApplicationResult<String>;

    async fn remove(&self, path: &str) -> ApplicationResult<()>;
}
