use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use super::document_store::DocumentStore;
use crate::shared::errors::{AppError, AppResult};

/// File-backed document store: one JSON file per key under a root directory.
///
/// This is the local-storage analogue for desktop embedding. Keys are
/// sanitized into file names, so `favorites:alice` maps to
/// `<root>/favorites_alice.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Storage key cannot be empty".to_string(),
            ));
        }

        // Keys may carry session separators; anything not filesystem-safe
        // becomes an underscore.
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        Ok(self.root.join(format!("{}.json", file_name)))
    }

    async fn ensure_root(&self) -> AppResult<()> {
        if !self.root.exists() {
            info!("creating local storage directory {:?}", self.root);
            fs::create_dir_all(&self.root).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(payload) => {
                debug!("file store: read '{}' ({} bytes)", key, payload.len());
                Ok(Some(payload))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn put(&self, key: &str, payload: &str) -> AppResult<()> {
        self.ensure_root().await?;
        let path = self.path_for(key)?;

        // Write-then-rename so a crash mid-write never leaves a torn document.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, payload).await?;
        fs::rename(&tmp, &path).await?;

        debug!("file store: wrote '{}' ({} bytes)", key, payload.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
