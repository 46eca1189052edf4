use crate::domain::ports::Storage;
use crate::utils::error::{LocalizerError, Result};
use std::path::PathBuf;

/// Storage rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &str) -> Result<bool> {
        tokio::fs::try_exists(self.full_path(path))
            .await
            .map_err(|e| LocalizerError::io("check", path, e))
    }

    async fn read_to_string(&self, path: &str) -> Result<String> {
        tokio::fs::read_to_string(self.full_path(path))
            .await
            .map_err(|e| LocalizerError::io("read", path, e))
    }

    async fn create_dir(&self, path: &str) -> Result<()> {
        tokio::fs::create_dir_all(self.full_path(path))
            .await
            .map_err(|e| LocalizerError::io("create directory", path, e))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LocalizerError::io("create directory", path, e))?;
        }

        tokio::fs::write(full_path, data)
            .await
            .map_err(|e| LocalizerError::io("write", path, e))
    }
}
