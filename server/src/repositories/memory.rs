//! In-process backend. Rows live in an ordered map behind an async lock;
//! ids are handed out sequentially starting at 1 and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Record, Repository, StoreError, StoreResult};
use crate::models::DbId;

struct Table<M> {
    next_id: DbId,
    rows: BTreeMap<DbId, M>,
}

pub struct MemoryRepository<M> {
    table: RwLock<Table<M>>,
}

impl<M: Record> MemoryRepository<M> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<M: Record> Default for MemoryRepository<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<M: Record> Repository<M> for MemoryRepository<M> {
    async fn find_all(&self) -> StoreResult<Vec<M>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<M>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, mut model: M) -> StoreResult<M> {
        let mut table = self.table.write().await;
        let id = match model.id() {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => return Err(StoreError::MissingRow { kind: M::KIND, id }),
            None => {
                let id = table.next_id;
                table.next_id += 1;
                model.set_id(Some(id));
                id
            }
        };
        table.rows.insert(id, model.clone());
        tracing::debug!(table = M::TABLE, id, "Saved row");
        Ok(model)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
