//! In-memory storage implementation
//!
//! Default backend; holds the collection behind an RwLock. Also what the
//! integration tests run against.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::core::{StorageResult, Tool, ToolStorage};

#[derive(Debug, Default)]
pub struct MemoryToolStorage {
    tools: RwLock<Vec<Tool>>,
}

impl MemoryToolStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ToolStorage for MemoryToolStorage {
    async fn load(&self) -> StorageResult<Vec<Tool>> {
        Ok(self.tools.read().clone())
    }

    async fn save(&self, tools: &[Tool]) -> StorageResult<()> {
        *self.tools.write() = tools.to_vec();
        Ok(())
    }
}
