//! Endpoints for listing transactions and fetching a single transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{database_id::parse_database_id, response::ok, stores::TransactionStore};

use super::TransactionState;

/// List all transactions, newest first.
pub async fn list_transactions_endpoint(State(state): State<TransactionState>) -> Response {
    match state.transaction_store.get_all() {
        Ok(transactions) => ok(transactions),
        Err(error) => error.into_response(),
    }
}

/// Get a single transaction by its ID.
pub async fn get_transaction_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<TransactionState>,
) -> Response {
    let transaction_id = match parse_database_id(&raw_id) {
        Ok(transaction_id) => transaction_id,
        Err(error) => return error.into_response(),
    };

    match state.transaction_store.get(transaction_id) {
        Ok(transaction) => ok(transaction),
        Err(error) => error.into_response(),
    }
}
