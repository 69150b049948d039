//! Transaction deletion endpoint.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{database_id::parse_database_id, response::ok_message, stores::TransactionStore};

use super::TransactionState;

/// Handle transaction deletion. Responds with a success message or an error.
pub async fn delete_transaction_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<TransactionState>,
) -> Response {
    let transaction_id = match parse_database_id(&raw_id) {
        Ok(transaction_id) => transaction_id,
        Err(error) => return error.into_response(),
    };

    match state.transaction_store.delete(transaction_id) {
        Ok(_) => {
            tracing::info!("deleted transaction {transaction_id}");
            ok_message("Transaction deleted successfully")
        }
        Err(error) => error.into_response(),
    }
}
