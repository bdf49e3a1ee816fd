// tests/support/mocks/storage.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use scribe_core::application::ApplicationResult;
use scribe_core::application::error::ApplicationError;
use scribe_core::application::ports::storage::ImageStore;

/// Records every store and remove call. `fail_remove` makes removal error so
/// tests can check that image cleanup stays best effort.
#[derive(Default)]
pub struct RecordingImageStore {
    stored: Mutex<Vec<Vec<u8>>>,
    removed: Mutex<Vec<String>>,
    fail_remove: AtomicBool,
}

impl RecordingImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_remove(&self, fail: bool) {
        self.fail_remove.store(fail, Ordering::SeqCst);
    }

    pub fn stored_count(&self) -> usize {
        self.stored.lock().unwrap().len()
    }

    pub fn removed_paths(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn store(&self, bytes: Vec<u8>) -> ApplicationResult<String> {
        let mut stored = self.stored.lock().unwrap();
        stored.push(bytes);
        Ok(format!("images/upload-{}.png", stored.len()))
    }

    async fn remove(&self, path: &str) -> ApplicationResult<()> {
        self.removed.lock().unwrap().push(path.to_string());
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("remove failed"));
        }
        Ok(())
    }
}
