// core.rs
//
// Core types for the tool store.
// Contains the record type, the storage trait, and the error type shared
// by every backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single entry in the tool directory.
///
/// `order` is the display position. Across the whole collection the order
/// values form a dense permutation of `1..=N`; the mutation layer is
/// responsible for keeping it that way, the store only persists what it
/// is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Stable identifier, assigned once and never reused after deletion.
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub order: u32,
}

/// Result alias for storage operations
pub type StorageResult<T> = Result<T, ToolStorageError>;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum ToolStorageError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Trait describing the load/save interface for tool storage backends.
///
/// `load` never fails because no data exists yet: absence is the valid
/// empty state and yields an empty list. `save` replaces the previously
/// persisted collection; the underlying write either fully succeeds or
/// reports a failure.
#[async_trait]
pub trait ToolStorage: Send + Sync + 'static {
    async fn load(&self) -> StorageResult<Vec<Tool>>;

    async fn save(&self, tools: &[Tool]) -> StorageResult<()>;
}
