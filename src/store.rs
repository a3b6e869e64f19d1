use crate::types::{DoubtRecord, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

/// History of processed doubts for one session.
///
/// Injected into the processor instead of living in a module-level global;
/// its lifecycle belongs to whoever builds the processor.
#[async_trait]
pub trait DoubtStore: Send + Sync {
    async fn append(&self, record: DoubtRecord) -> Result<()>;

    async fn list(&self) -> Result<Vec<DoubtRecord>>;

    async fn clear(&self) -> Result<()>;
}

/// Process-memory store backing the default session lifecycle.
pub struct MemoryDoubtStore {
    records: RwLock<Vec<DoubtRecord>>,
}

impl MemoryDoubtStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryDoubtStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DoubtStore for MemoryDoubtStore {
    async fn append(&self, record: DoubtRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<DoubtRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut records = self.records.write().await;
        let removed = records.len();
        records.clear();
        info!("cleared {} doubt records", removed);
        Ok(())
    }
}
