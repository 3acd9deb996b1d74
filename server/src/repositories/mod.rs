//! Persistence gateway abstraction.
//!
//! Every table is reached through the same four-operation [`Repository`]
//! trait. Two backends implement it: [`PgStore`] runs explicit SQL against
//! PostgreSQL and [`MemoryRepository`] keeps rows in process.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DbId, EventModel, SampleModel, TenantModel, TransactionModel};

pub mod memory;
pub mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{kind} with id {id} does not exist")]
    MissingRow { kind: &'static str, id: DbId },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A persisted record keyed by a numeric id.
///
/// `id` is `None` until the record has been saved for the first time.
pub trait Record: Clone + Send + Sync + 'static {
    /// Table the record lives in.
    const TABLE: &'static str;
    /// Human-readable name used in error messages.
    const KIND: &'static str;

    fn id(&self) -> Option<DbId>;
    fn set_id(&mut self, id: Option<DbId>);
}

#[async_trait]
pub trait Repository<M: Record>: Send + Sync {
    /// All rows, ordered by id ascending.
    async fn find_all(&self) -> StoreResult<Vec<M>>;

    /// The row with the given id, or `None` when absent.
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<M>>;

    /// Insert when `model.id()` is `None`, otherwise update the existing row.
    ///
    /// Updating an id that does not exist yields [`StoreError::MissingRow`].
    async fn save(&self, model: M) -> StoreResult<M>;

    /// Delete by id. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;
}

/// One gateway per table, shared by every request.
#[derive(Clone)]
pub struct Stores {
    pub events: Arc<dyn Repository<EventModel>>,
    pub tenants: Arc<dyn Repository<TenantModel>>,
    pub samples: Arc<dyn Repository<SampleModel>>,
    pub transactions: Arc<dyn Repository<TransactionModel>>,
}

impl Stores {
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            events: store.clone(),
            tenants: store.clone(),
            samples: store.clone(),
            transactions: store,
        }
    }

    pub fn memory() -> Self {
        Self {
            events: Arc::new(MemoryRepository::<EventModel>::new()),
            tenants: Arc::new(MemoryRepository::<TenantModel>::new()),
            samples: Arc::new(MemoryRepository::<SampleModel>::new()),
            transactions: Arc::new(MemoryRepository::<TransactionModel>::new()),
        }
    }
}
