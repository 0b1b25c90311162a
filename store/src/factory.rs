//! Backend selection and construction.

use std::sync::Arc;

use tracing::info;

use super::{
    config::{FileConfig, RedisConfig, StorageBackend},
    core::ToolStorage,
    file::FileToolStorage,
    memory::MemoryToolStorage,
    redis::RedisToolStorage,
};

/// Everything needed to construct a storage backend.
#[derive(Debug, Clone, Default)]
pub struct StorageFactoryConfig {
    pub backend: StorageBackend,
    pub file: Option<FileConfig>,
    pub redis: Option<RedisConfig>,
}

/// Build the configured storage backend.
pub fn create_storage(config: &StorageFactoryConfig) -> Result<Arc<dyn ToolStorage>, String> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory tool storage");
            Ok(Arc::new(MemoryToolStorage::new()))
        }
        StorageBackend::File => {
            let file = config
                .file
                .as_ref()
                .ok_or("file backend selected but no file path configured")?;
            file.validate()?;
            info!(path = %file.path.display(), "Using file tool storage");
            Ok(Arc::new(FileToolStorage::new(file.clone())))
        }
        StorageBackend::Redis => {
            let redis = config
                .redis
                .as_ref()
                .ok_or("redis backend selected but no redis url configured")?;
            redis.validate()?;
            info!(key = %redis.key, "Using redis tool storage");
            Ok(Arc::new(RedisToolStorage::new(redis.clone())?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_needs_no_extra_config() {
        let config = StorageFactoryConfig::default();
        assert!(create_storage(&config).is_ok());
    }

    #[test]
    fn file_backend_requires_a_path() {
        let config = StorageFactoryConfig {
            backend: StorageBackend::File,
            ..Default::default()
        };
        assert!(create_storage(&config).is_err());
    }

    #[test]
    fn redis_backend_rejects_invalid_url() {
        let config = StorageFactoryConfig {
            backend: StorageBackend::Redis,
            redis: Some(RedisConfig {
                url: "http://not-redis".to_string(),
                pool_max: RedisConfig::default_pool_max(),
                key: RedisConfig::default_key(),
            }),
            ..Default::default()
        };
        assert!(create_storage(&config).is_err());
    }
}
