//! Redis storage implementation
//!
//! The whole collection lives under a single key as a JSON document,
//! read and written as one unit.

use async_trait::async_trait;
use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;

use super::{
    config::RedisConfig,
    core::{StorageResult, Tool, ToolStorage, ToolStorageError},
};

pub(super) struct RedisToolStorage {
    pool: Pool,
    key: String,
}

impl RedisToolStorage {
    pub fn new(config: RedisConfig) -> Result<Self, String> {
        let mut cfg = Config::from_url(config.url);
        cfg.pool = Some(deadpool_redis::PoolConfig::new(config.pool_max));
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| e.to_string())?;
        Ok(Self {
            pool,
            key: config.key,
        })
    }

    async fn connection(&self) -> StorageResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| ToolStorageError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl ToolStorage for RedisToolStorage {
    async fn load(&self) -> StorageResult<Vec<Tool>> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn
            .get(&self.key)
            .await
            .map_err(|e| ToolStorageError::StorageError(e.to_string()))?;

        match raw {
            Some(s) if !s.is_empty() => Ok(serde_json::from_str(&s)?),
            _ => Ok(Vec::new()),
        }
    }

    async fn save(&self, tools: &[Tool]) -> StorageResult<()> {
        let json = serde_json::to_string(tools)?;
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(&self.key, json)
            .await
            .map_err(|e| ToolStorageError::StorageError(e.to_string()))
    }
}
