use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI32, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{model::Account, repo::DbConnection};

// Ids come from an atomic counter so concurrent inserts never collide
pub struct MemoryDb {
    next_id: AtomicI32,
    rows: RwLock<BTreeMap<i32, Account>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        MemoryDb {
            next_id: AtomicI32::new(1),
            rows: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DbConnection for MemoryDb {
    async fn create_table(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn insert_account(&self, account: &Account) -> Result<i32, sqlx::Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut row = account.clone();
        row.id = id;
        self.rows.write().await.insert(id, row);
        Ok(id)
    }

    async fn fetch_account(&self, id: i32) -> Result<Account, sqlx::Error> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn fetch_accounts(&self) -> Result<Vec<Account>, sqlx::Error> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn remove_account(&self, id: i32) -> Result<u64, sqlx::Error> {
        let removed = self.rows.write().await.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    fn log_pool_stats(&self) {
        debug!("memory store has no pool");
    }
}
