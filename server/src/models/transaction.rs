use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use super::DbId;
use crate::repositories::Record;

/// A row from the `transactions` table.
///
/// The ticket and buyer a transaction was created with are stored inline,
/// flattened into `ticket_*` and `buyer_*` columns.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TransactionModel {
    pub id: Option<DbId>,
    pub ticket_event_id: Option<DbId>,
    pub ticket_description: String,
    pub ticket_price: Decimal,
    pub buyer_name: String,
    pub buyer_email: String,
    pub created_at: DateTime<Utc>,
}

impl Record for TransactionModel {
    const TABLE: &'static str = "transactions";
    const KIND: &'static str = "Transaction";

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn set_id(&mut self, id: Option<DbId>) {
        self.id = id;
    }
}
