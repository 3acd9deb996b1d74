//! Handlers for `/api/transactions`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use crate::domain::{Buyer, Ticket};
use crate::dtos::{TransactionDto, TransactionRequest};
use crate::models::DbId;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::response::created;

/// GET /api/transactions/
pub async fn get_all_transactions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TransactionDto>>> {
    let transactions = state
        .transactions
        .get_all_transactions()
        .await?
        .into_iter()
        .map(TransactionDto::from)
        .collect();
    Ok(Json(transactions))
}

/// GET /api/transactions/:id
pub async fn get_transaction(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<TransactionDto>> {
    let Path(id) = path?;
    let transaction = state.transactions.get_transaction(id).await?;
    Ok(Json(transaction.into()))
}

/// POST /api/transactions/create
///
/// Returns 201 with the stored transaction. A missing `ticketDTO` or
/// `buyerDTO`, or a body that is not valid JSON, is a 400.
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let transaction = state
        .transactions
        .create_transaction(
            request.ticket_dto.map(Ticket::from),
            request.buyer_dto.map(Buyer::from),
        )
        .await?;
    Ok(created(TransactionDto::from(transaction)))
}
