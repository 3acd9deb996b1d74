use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DbId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub event_id: Option<DbId>,
    pub description: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerDto {
    pub name: String,
    pub email: String,
}

/// Body of `POST /api/transactions/create`.
///
/// Both parts are optional at the parsing stage so that a missing ticket or
/// buyer is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    #[serde(rename = "ticketDTO")]
    pub ticket_dto: Option<TicketDto>,
    #[serde(rename = "buyerDTO")]
    pub buyer_dto: Option<BuyerDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: Option<DbId>,
    pub ticket: TicketDto,
    pub buyer: BuyerDto,
    pub created_at: DateTime<Utc>,
}
