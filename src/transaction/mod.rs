//! Income and expense transactions, and the endpoints for managing them.

mod create_endpoint;
mod delete_endpoint;
mod domain;
mod edit_endpoint;
mod list_endpoint;
mod summary_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use domain::{
    CategoryLabel, NewTransaction, Transaction, TransactionForm, TransactionPatch,
    TransactionUpdateForm,
};
pub use edit_endpoint::update_transaction_endpoint;
pub use list_endpoint::{get_transaction_endpoint, list_transactions_endpoint};
pub use summary_endpoint::get_summary_endpoint;

use axum::extract::FromRef;

use crate::{AppState, stores::sqlite::SQLiteTransactionStore};

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store for income and expense transactions.
    pub transaction_store: SQLiteTransactionStore,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use std::{
        str::FromStr,
        sync::{Arc, Mutex},
    };

    use rusqlite::Connection;
    use rust_decimal::Decimal;

    use crate::{db::initialize, money::Amount, stores::sqlite::SQLiteTransactionStore};

    use super::TransactionState;

    pub(crate) fn get_transaction_state() -> TransactionState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        TransactionState {
            transaction_store: SQLiteTransactionStore::new(Arc::new(Mutex::new(connection))),
        }
    }

    pub(crate) fn amount(value: &str) -> Amount {
        Amount::new(Decimal::from_str(value).unwrap()).unwrap()
    }
}
