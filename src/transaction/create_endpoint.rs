//! Transaction creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{Error, response::created, stores::TransactionStore, transaction::TransactionForm};

use super::TransactionState;

/// Handle a request to record income or an expense.
///
/// Expenses larger than the current balance are refused with 400.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    form: Result<Json<TransactionForm>, JsonRejection>,
) -> Response {
    let new_transaction = match form
        .map_err(Error::from)
        .and_then(|Json(form)| form.validate())
    {
        Ok(new_transaction) => new_transaction,
        Err(error) => return error.into_response(),
    };

    match state.transaction_store.create_guarded(new_transaction) {
        Ok(transaction) => {
            tracing::info!(
                "recorded {} of {} for {} ({})",
                transaction.transaction_type,
                transaction.amount,
                transaction.category,
                transaction.id
            );
            created(transaction)
        }
        Err(error @ Error::InsufficientBalance { .. }) => {
            tracing::info!("refused transaction: {error}");
            error.into_response()
        }
        Err(error) => error.into_response(),
    }
}
