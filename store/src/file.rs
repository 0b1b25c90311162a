//! File storage implementation
//!
//! Persists the collection as a single JSON document on disk. A missing
//! file is the valid empty state, not an error.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{
    config::FileConfig,
    core::{StorageResult, Tool, ToolStorage, ToolStorageError},
};

pub(super) struct FileToolStorage {
    path: PathBuf,
}

impl FileToolStorage {
    pub fn new(config: FileConfig) -> Self {
        Self { path: config.path }
    }
}

#[async_trait]
impl ToolStorage for FileToolStorage {
    async fn load(&self) -> StorageResult<Vec<Tool>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Tool file not present, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ToolStorageError::StorageError(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&self, tools: &[Tool]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(tools)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ToolStorageError::StorageError(e.to_string()))?;
            }
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| ToolStorageError::StorageError(e.to_string()))
    }
}
