//! Storage backend configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

/// Storage backend selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
    Redis,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(format!(
                "unknown storage backend '{other}', expected memory, file or redis"
            )),
        }
    }
}

/// File backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileConfig {
    // Path of the JSON document holding the collection
    pub path: PathBuf,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("file path should not be empty".to_string());
        }
        Ok(())
    }
}

/// Redis backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedisConfig {
    // Redis connection URL
    // redis://[:password@]host[:port][/db]
    pub url: String,
    // Connection pool max size
    #[serde(default = "default_redis_pool_max")]
    pub pool_max: usize,
    // Key under which the serialized collection is stored
    #[serde(default = "default_redis_key")]
    pub key: String,
}

fn default_redis_pool_max() -> usize {
    16
}

fn default_redis_key() -> String {
    "tools".to_string()
}

impl RedisConfig {
    pub fn default_pool_max() -> usize {
        default_redis_pool_max()
    }

    pub fn default_key() -> String {
        default_redis_key()
    }

    pub fn validate(&self) -> Result<(), String> {
        let s = self.url.trim();
        if s.is_empty() {
            return Err("redis url should not be empty".to_string());
        }

        let url = Url::parse(s).map_err(|e| format!("invalid redis url: {}", e))?;

        let scheme = url.scheme();
        if scheme != "redis" && scheme != "rediss" {
            return Err(format!("unsupported URL scheme: {}", scheme));
        }

        if url.host().is_none() {
            return Err("redis url must have a host".to_string());
        }

        if self.pool_max == 0 {
            return Err("pool_max must be greater than 0".to_string());
        }

        if self.key.is_empty() {
            return Err("redis key should not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redis_config(url: &str) -> RedisConfig {
        RedisConfig {
            url: url.to_string(),
            pool_max: default_redis_pool_max(),
            key: default_redis_key(),
        }
    }

    #[test]
    fn backend_parses_case_insensitively() {
        assert_eq!("memory".parse(), Ok(StorageBackend::Memory));
        assert_eq!("File".parse(), Ok(StorageBackend::File));
        assert_eq!("REDIS".parse(), Ok(StorageBackend::Redis));
        assert!("postgres".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn redis_config_accepts_valid_urls() {
        assert!(redis_config("redis://localhost:6379").validate().is_ok());
        assert!(redis_config("rediss://user:pw@redis.internal/2")
            .validate()
            .is_ok());
    }

    #[test]
    fn redis_config_rejects_bad_input() {
        assert!(redis_config("").validate().is_err());
        assert!(redis_config("http://localhost").validate().is_err());
        assert!(redis_config("redis://").validate().is_err());

        let mut cfg = redis_config("redis://localhost");
        cfg.pool_max = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = redis_config("redis://localhost");
        cfg.key = String::new();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn file_config_rejects_empty_path() {
        let cfg = FileConfig {
            path: PathBuf::new(),
        };
        assert!(cfg.validate().is_err());

        let cfg = FileConfig {
            path: PathBuf::from("/var/lib/tooldir/tools.json"),
        };
        assert!(cfg.validate().is_ok());
    }
}
