// src/infrastructure/storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::ImageStore,
};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Filesystem-backed image store. Files live flat under `root` with v4 UUID
/// names; returned paths are `images/<name>` so they double as public URLs.
#[derive(Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a client-supplied path to a file inside the store, refusing
    /// anything that is not a plain file name under the root.
    fn resolve(&self, path: &str) -> ApplicationResult<PathBuf> {
        let relative = path.strip_prefix("images/").unwrap_or(path);
        let name = Path::new(relative);
        let mut components = name.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Ok(self.root.join(file)),
            _ => Err(ApplicationError::infrastructure(format!(
                "refusing to touch path outside image store: {path}"
            ))),
        }
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, bytes: Vec<u8>) -> ApplicationResult<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let name = Uuid::new_v4().to_string();
        let target = self.root.join(&name);
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(format!("images/{name}"))
    }

    async fn remove(&self, path: &str) -> ApplicationResult<()> {
        let target = self.resolve(path)?;
        tokio::fs::remove_file(&target)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}
