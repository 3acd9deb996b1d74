use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use rust_decimal::Decimal;

use crate::domain::{Buyer, Ticket, Transaction};
use crate::models::{DbId, TransactionModel};
use crate::repositories::{Record, Repository};
use crate::utils::error::{AppError, AppResult};

/// Prices are stored as `NUMERIC(12, 2)`: whole cents, magnitude below 10^10.
const PRICE_SCALE: u32 = 2;
const PRICE_LIMIT: i64 = 10_000_000_000;

pub struct TransactionService {
    repo: Arc<dyn Repository<TransactionModel>>,
}

impl TransactionService {
    pub fn new(repo: Arc<dyn Repository<TransactionModel>>) -> Self {
        Self { repo }
    }

    pub async fn get_all_transactions(&self) -> AppResult<Vec<Transaction>> {
        let models = self.repo.find_all().await?;
        Ok(models.into_iter().map(Transaction::from).collect())
    }

    pub async fn get_transaction(&self, id: DbId) -> AppResult<Transaction> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Transaction::from)
            .ok_or_else(|| AppError::not_found(TransactionModel::KIND, id))
    }

    /// Records the sale of `ticket` to `buyer`.
    ///
    /// Both must be present and the price must fit the stored column; it is
    /// returned with exactly two decimal places. No pricing or availability
    /// rules are applied.
    pub async fn create_transaction(
        &self,
        ticket: Option<Ticket>,
        buyer: Option<Buyer>,
    ) -> AppResult<Transaction> {
        let mut ticket = ticket
            .ok_or_else(|| AppError::ValidationError("ticketDTO is required".to_string()))?;
        let buyer =
            buyer.ok_or_else(|| AppError::ValidationError("buyerDTO is required".to_string()))?;
        ticket.price = normalize_price(ticket.price)?;

        // Postgres keeps microseconds; truncate so the stored and returned values agree.
        let transaction = Transaction {
            id: None,
            ticket,
            buyer,
            created_at: Utc::now().trunc_subsecs(6),
        };

        let saved = self.repo.save(TransactionModel::from(transaction)).await?;
        tracing::info!(id = ?saved.id, event_id = ?saved.ticket_event_id, "Transaction created");
        Ok(Transaction::from(saved))
    }
}

/// Checks `price` against the column it is stored in and fixes its scale, so
/// every backend hands back the same value the client gets in the response.
fn normalize_price(mut price: Decimal) -> AppResult<Decimal> {
    if price.round_dp(PRICE_SCALE) != price {
        return Err(AppError::ValidationError(format!(
            "price {} has more than {} decimal places",
            price, PRICE_SCALE
        )));
    }
    if price.abs() >= Decimal::from(PRICE_LIMIT) {
        return Err(AppError::ValidationError(format!(
            "price {} is out of range",
            price
        )));
    }
    price.rescale(PRICE_SCALE);
    Ok(price)
}
