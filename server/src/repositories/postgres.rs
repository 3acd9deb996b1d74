//! PostgreSQL backend. One explicit set of queries per table.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{Record, Repository, StoreError, StoreResult};
use crate::models::{DbId, EventModel, SampleModel, TenantModel, TransactionModel};

const EVENT_COLUMNS: &str = "id, name, event_type, location, starts_at";
const TENANT_COLUMNS: &str = "id, name, contact_email";
const SAMPLE_COLUMNS: &str = "id, name, description";
const TRANSACTION_COLUMNS: &str = "id, ticket_event_id, ticket_description, ticket_price, \
     buyer_name, buyer_email, created_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn select_all<M>(&self, columns: &str) -> StoreResult<Vec<M>>
    where
        M: Record + Unpin + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>,
    {
        let query = format!("SELECT {columns} FROM {} ORDER BY id ASC", M::TABLE);
        Ok(sqlx::query_as::<_, M>(&query).fetch_all(&self.pool).await?)
    }

    async fn select_by_id<M>(&self, columns: &str, id: DbId) -> StoreResult<Option<M>>
    where
        M: Record + Unpin + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>,
    {
        let query = format!("SELECT {columns} FROM {} WHERE id = $1", M::TABLE);
        Ok(sqlx::query_as::<_, M>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_row<M: Record>(&self, id: DbId) -> StoreResult<bool> {
        let query = format!("DELETE FROM {} WHERE id = $1", M::TABLE);
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Turns the optional row of an `UPDATE ... RETURNING` into the saved model.
fn updated<M: Record>(row: Option<M>, id: DbId) -> StoreResult<M> {
    row.ok_or(StoreError::MissingRow { kind: M::KIND, id })
}

#[async_trait]
impl Repository<EventModel> for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<EventModel>> {
        self.select_all(EVENT_COLUMNS).await
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<EventModel>> {
        self.select_by_id(EVENT_COLUMNS, id).await
    }

    async fn save(&self, model: EventModel) -> StoreResult<EventModel> {
        match model.id {
            None => {
                let query = format!(
                    "INSERT INTO events (name, event_type, location, starts_at)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {EVENT_COLUMNS}"
                );
                Ok(sqlx::query_as::<_, EventModel>(&query)
                    .bind(&model.name)
                    .bind(&model.event_type)
                    .bind(&model.location)
                    .bind(model.starts_at)
                    .fetch_one(&self.pool)
                    .await?)
            }
            Some(id) => {
                let query = format!(
                    "UPDATE events SET name = $2, event_type = $3, location = $4, starts_at = $5
                     WHERE id = $1
                     RETURNING {EVENT_COLUMNS}"
                );
                let row = sqlx::query_as::<_, EventModel>(&query)
                    .bind(id)
                    .bind(&model.name)
                    .bind(&model.event_type)
                    .bind(&model.location)
                    .bind(model.starts_at)
                    .fetch_optional(&self.pool)
                    .await?;
                updated(row, id)
            }
        }
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        self.delete_row::<EventModel>(id).await
    }
}

#[async_trait]
impl Repository<TenantModel> for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<TenantModel>> {
        self.select_all(TENANT_COLUMNS).await
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<TenantModel>> {
        self.select_by_id(TENANT_COLUMNS, id).await
    }

    async fn save(&self, model: TenantModel) -> StoreResult<TenantModel> {
        match model.id {
            None => {
                let query = format!(
                    "INSERT INTO tenants (name, contact_email)
                     VALUES ($1, $2)
                     RETURNING {TENANT_COLUMNS}"
                );
                Ok(sqlx::query_as::<_, TenantModel>(&query)
                    .bind(&model.name)
                    .bind(&model.contact_email)
                    .fetch_one(&self.pool)
                    .await?)
            }
            Some(id) => {
                let query = format!(
                    "UPDATE tenants SET name = $2, contact_email = $3
                     WHERE id = $1
                     RETURNING {TENANT_COLUMNS}"
                );
                let row = sqlx::query_as::<_, TenantModel>(&query)
                    .bind(id)
                    .bind(&model.name)
                    .bind(&model.contact_email)
                    .fetch_optional(&self.pool)
                    .await?;
                updated(row, id)
            }
        }
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        self.delete_row::<TenantModel>(id).await
    }
}

#[async_trait]
impl Repository<SampleModel> for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<SampleModel>> {
        self.select_all(SAMPLE_COLUMNS).await
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<SampleModel>> {
        self.select_by_id(SAMPLE_COLUMNS, id).await
    }

    async fn save(&self, model: SampleModel) -> StoreResult<SampleModel> {
        match model.id {
            None => {
                let query = format!(
                    "INSERT INTO samples (name, description)
                     VALUES ($1, $2)
                     RETURNING {SAMPLE_COLUMNS}"
                );
                Ok(sqlx::query_as::<_, SampleModel>(&query)
                    .bind(&model.name)
                    .bind(&model.description)
                    .fetch_one(&self.pool)
                    .await?)
            }
            Some(id) => {
                let query = format!(
                    "UPDATE samples SET name = $2, description = $3
                     WHERE id = $1
                     RETURNING {SAMPLE_COLUMNS}"
                );
                let row = sqlx::query_as::<_, SampleModel>(&query)
                    .bind(id)
                    .bind(&model.name)
                    .bind(&model.description)
                    .fetch_optional(&self.pool)
                    .await?;
                updated(row, id)
            }
        }
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        self.delete_row::<SampleModel>(id).await
    }
}

#[async_trait]
impl Repository<TransactionModel> for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<TransactionModel>> {
        self.select_all(TRANSACTION_COLUMNS).await
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<TransactionModel>> {
        self.select_by_id(TRANSACTION_COLUMNS, id).await
    }

    async fn save(&self, model: TransactionModel) -> StoreResult<TransactionModel> {
        match model.id {
            None => {
                let query = format!(
                    "INSERT INTO transactions
                        (ticket_event_id, ticket_description, ticket_price,
                         buyer_name, buyer_email, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6)
                     RETURNING {TRANSACTION_COLUMNS}"
                );
                Ok(sqlx::query_as::<_, TransactionModel>(&query)
                    .bind(model.ticket_event_id)
                    .bind(&model.ticket_description)
                    .bind(model.ticket_price)
                    .bind(&model.buyer_name)
                    .bind(&model.buyer_email)
                    .bind(model.created_at)
                    .fetch_one(&self.pool)
                    .await?)
            }
            Some(id) => {
                let query = format!(
                    "UPDATE transactions SET
                        ticket_event_id = $2,
                        ticket_description = $3,
                        ticket_price = $4,
                        buyer_name = $5,
                        buyer_email = $6,
                        created_at = $7
                     WHERE id = $1
                     RETURNING {TRANSACTION_COLUMNS}"
                );
                let row = sqlx::query_as::<_, TransactionModel>(&query)
                    .bind(id)
                    .bind(model.ticket_event_id)
                    .bind(&model.ticket_description)
                    .bind(model.ticket_price)
                    .bind(&model.buyer_name)
                    .bind(&model.buyer_email)
                    .bind(model.created_at)
                    .fetch_optional(&self.pool)
                    .await?;
                updated(row, id)
            }
        }
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        self.delete_row::<TransactionModel>(id).await
    }
}
