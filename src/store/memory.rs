use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{distinct_users, owned_items, ItemId, OwnershipRecord, UserId},
};

use super::OwnershipStore;

/// Ownership store that keeps records in memory only
#[derive(Default)]
pub struct InMemoryOwnershipStore {
    records: RwLock<Vec<OwnershipRecord>>,
}

impl InMemoryOwnershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `records`
    pub fn with_records(records: Vec<OwnershipRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait::async_trait]
impl OwnershipStore for InMemoryOwnershipStore {
    async fn owned_by(&self, username: &str) -> AppResult<Vec<ItemId>> {
        let records = self.records.read().await;
        Ok(owned_items(&records, username))
    }

    async fn append(&self, username: &str, game: &str) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.push(OwnershipRecord::new(username, game));
        Ok(())
    }

    async fn users(&self) -> AppResult<Vec<UserId>> {
        let records = self.records.read().await;
        Ok(distinct_users(&records))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
