use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::DbId;

/// The ticket being sold in a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub event_id: Option<DbId>,
    pub description: String,
    pub price: Decimal,
}

/// The person buying the ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct Buyer {
    pub name: String,
    pub email: String,
}

/// A ticket sale. Exactly one ticket and one buyer per transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<DbId>,
    pub ticket: Ticket,
    pub buyer: Buyer,
    pub created_at: DateTime<Utc>,
}
