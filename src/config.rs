//! Service configuration.
//!
//! Everything is injected up front through flags or environment
//! variables; nothing on the request path reads the environment.

use std::path::PathBuf;

use clap::Parser;
use tool_store::{FileConfig, RedisConfig, StorageBackend, StorageFactoryConfig};

/// Command-line and environment configuration for the tool directory
/// service.
#[derive(Debug, Parser)]
#[command(
    name = "tooldir",
    version,
    about = "Ordered internal tools directory with a small CRUD API"
)]
pub struct AppConfig {
    /// Address to bind
    #[arg(long, env = "TOOLDIR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "TOOLDIR_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Storage backend: memory, file or redis
    #[arg(long, env = "TOOLDIR_BACKEND", default_value = "memory")]
    pub backend: StorageBackend,

    /// Path of the JSON document holding the collection (file backend)
    #[arg(long, env = "TOOLDIR_FILE_PATH")]
    pub file_path: Option<PathBuf>,

    /// Redis connection URL (redis backend)
    #[arg(long, env = "TOOLDIR_REDIS_URL")]
    pub redis_url: Option<String>,

    /// Key under which the collection is stored (redis backend)
    #[arg(long, env = "TOOLDIR_REDIS_KEY", default_value = "tools")]
    pub redis_key: String,

    /// Shared secret guarding mutating endpoints. When unset, mutations
    /// are rejected with a server-misconfiguration error.
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: Option<String>,
}

impl AppConfig {
    /// Assemble the storage factory input for the selected backend.
    pub fn storage_config(&self) -> StorageFactoryConfig {
        StorageFactoryConfig {
            backend: self.backend.clone(),
            file: self
                .file_path
                .clone()
                .map(|path| FileConfig { path }),
            redis: self.redis_url.clone().map(|url| RedisConfig {
                url,
                pool_max: RedisConfig::default_pool_max(),
                key: self.redis_key.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_the_memory_backend() {
        let config = AppConfig::parse_from(["tooldir"]);
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.port, 3000);
        assert!(config.admin_password.is_none());
    }

    #[test]
    fn file_backend_flags_feed_the_factory_config() {
        let config = AppConfig::parse_from([
            "tooldir",
            "--backend",
            "file",
            "--file-path",
            "/tmp/tools.json",
        ]);
        let storage = config.storage_config();
        assert_eq!(storage.backend, StorageBackend::File);
        assert_eq!(
            storage.file.unwrap().path,
            PathBuf::from("/tmp/tools.json")
        );
    }

    #[test]
    fn redis_backend_flags_feed_the_factory_config() {
        let config = AppConfig::parse_from([
            "tooldir",
            "--backend",
            "redis",
            "--redis-url",
            "redis://localhost:6379",
            "--redis-key",
            "tools:v2",
        ]);
        let storage = config.storage_config();
        assert_eq!(storage.backend, StorageBackend::Redis);
        let redis = storage.redis.unwrap();
        assert_eq!(redis.url, "redis://localhost:6379");
        assert_eq!(redis.key, "tools:v2");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(AppConfig::try_parse_from(["tooldir", "--backend", "postgres"]).is_err());
    }
}
