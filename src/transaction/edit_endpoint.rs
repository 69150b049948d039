//! Transaction update endpoint.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{
    Error, database_id::parse_database_id, response::ok, stores::TransactionStore,
    transaction::TransactionUpdateForm,
};

use super::TransactionState;

/// Handle a partial update of a transaction. Only the fields in the body are changed.
///
/// The balance is not checked again, so turning an income into an expense may
/// leave the balance negative.
pub async fn update_transaction_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<TransactionState>,
    form: Result<Json<TransactionUpdateForm>, JsonRejection>,
) -> Response {
    let transaction_id = match parse_database_id(&raw_id) {
        Ok(transaction_id) => transaction_id,
        Err(error) => return error.into_response(),
    };

    let patch = match form
        .map_err(Error::from)
        .and_then(|Json(form)| form.validate())
    {
        Ok(patch) => patch,
        Err(error) => return error.into_response(),
    };

    match state.transaction_store.update(transaction_id, patch) {
        Ok(transaction) => {
            tracing::info!("updated transaction {transaction_id}");
            ok(transaction)
        }
        Err(error) => error.into_response(),
    }
}
