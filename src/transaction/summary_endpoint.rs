//! Endpoint for the income, expense and balance totals.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{balance::summarize, response::ok, stores::TransactionStore};

use super::TransactionState;

/// Respond with the total income, total expense and balance over all transactions.
pub async fn get_summary_endpoint(State(state): State<TransactionState>) -> Response {
    match state
        .transaction_store
        .entries()
        .and_then(|entries| summarize(&entries))
    {
        Ok(summary) => ok(summary),
        Err(error) => error.into_response(),
    }
}
