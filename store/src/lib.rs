//! Storage for the tool directory collection.
//!
//! The whole collection of tool records is the unit of persistence: `load`
//! returns it in full and `save` replaces it in full. There is no caching,
//! no versioning, and no isolation between concurrent load-modify-save
//! cycles; the last writer wins.
//!
//! Supported backends:
//! - Memory (default)
//! - File (single JSON document on disk)
//! - Redis (single key holding the JSON document)

pub mod config;
mod core;
mod factory;
mod file;
mod memory;
mod redis;

pub use config::{FileConfig, RedisConfig, StorageBackend};
pub use self::core::{StorageResult, Tool, ToolStorage, ToolStorageError};
pub use factory::{create_storage, StorageFactoryConfig};
// Re-export the memory implementation for testing
pub use memory::MemoryToolStorage;
