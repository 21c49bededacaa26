//! Local filesystem storage implementation.
//!
//! Each key is a file under the root directory. Writes go to a temporary
//! sibling first and are renamed into place, so a crashed write never leaves
//! a half-written document behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::pipeline::IdSet;
use crate::storage::Storage;

const LOG_TARGET: &str = "zxin::storage";

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    log_target: String,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            log_target: LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    /// Get the full path for a relative key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        let write = async {
            self.ensure_dir(&path).await?;

            let tmp = path.with_extension("tmp");
            let mut file = tokio::fs::File::create(&tmp).await?;
            file.write_all(bytes).await?;
            file.flush().await?;
            drop(file);

            tokio::fs::rename(&tmp, &path).await
        };
        write.await.map_err(|e| AppError::write(key, e))?;

        log::debug!(
            target: self.log_target.as_str(),
            "Wrote {} bytes to {}",
            bytes.len(),
            path.display()
        );
        Ok(())
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::read(key, e)),
        }
    }

    /// Write pretty JSON, keeping non-ASCII text readable.
    async fn write_json<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|e| AppError::write(key, e))?;
        self.write_bytes(key, &bytes).await
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn load_set(&self, key: &str) -> Result<IdSet> {
        match self.read_bytes(key).await? {
            Some(bytes) => {
                let ids: Vec<String> =
                    serde_json::from_slice(&bytes).map_err(|e| AppError::read(key, e))?;
                Ok(ids.into_iter().collect())
            }
            None => Ok(IdSet::new()),
        }
    }

    async fn save_set(&self, key: &str, set: &IdSet) -> Result<()> {
        let ids: Vec<&String> = set.iter().collect();
        self.write_json(key, &ids).await
    }

    async fn load_document(&self, key: &str) -> Result<Option<Value>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(
                serde_json::from_slice(&bytes).map_err(|e| AppError::read(key, e))?,
            )),
            None => Ok(None),
        }
    }

    async fn save_document(&self, key: &str, value: &Value) -> Result<()> {
        self.write_json(key, value).await
    }

}
