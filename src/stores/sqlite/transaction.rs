//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, ToSql, TransactionBehavior, params_from_iter};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    Error,
    balance::evaluate,
    database_id::DatabaseId,
    db::{CreateTable, MapRow},
    money::{Entry, TransactionType},
    stores::TransactionStore,
    transaction::{CategoryLabel, NewTransaction, Transaction, TransactionPatch},
};

use super::lock;

const TRANSACTION_COLUMNS: &str = "id, type, category, amount, description, created_at";

/// Stores transactions in a SQLite database.
///
/// Checked creation reads the balance and inserts the transaction inside one
/// `BEGIN IMMEDIATE` transaction while holding the connection lock, so
/// concurrent expenses cannot overdraw the balance.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

fn select_entries(connection: &Connection) -> Result<Vec<Entry>, Error> {
    connection
        .prepare("SELECT type, amount FROM \"transaction\";")?
        .query_map([], |row| {
            Ok(Entry {
                transaction_type: row.get(0)?,
                amount: row.get(1)?,
            })
        })?
        .map(|maybe_entry| maybe_entry.map_err(|error| error.into()))
        .collect()
}

fn insert_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!(
            "INSERT INTO \"transaction\" ({TRANSACTION_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {TRANSACTION_COLUMNS};"
        ))?
        .query_row(
            (
                Uuid::new_v4(),
                new_transaction.transaction_type,
                new_transaction.category,
                new_transaction.amount,
                new_transaction.description,
                OffsetDateTime::now_utc(),
            ),
            SQLiteTransactionStore::map_row,
        )?;

    Ok(transaction)
}

fn not_found_if_no_rows(error: rusqlite::Error) -> Error {
    match error {
        rusqlite::Error::QueryReturnedNoRows => Error::TransactionNotFound,
        error => error.into(),
    }
}

impl TransactionStore for SQLiteTransactionStore {
    fn entries(&self) -> Result<Vec<Entry>, Error> {
        select_entries(&*lock(&self.connection)?)
    }

    /// Retrieve all transactions, newest first.
    ///
    /// Transactions created within the same clock tick are ordered by insertion.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        lock(&self.connection)?
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\"
                 ORDER BY created_at DESC, rowid DESC;"
            ))?
            .query_map([], SQLiteTransactionStore::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
            .collect()
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::TransactionNotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: DatabaseId) -> Result<Transaction, Error> {
        lock(&self.connection)?
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" WHERE id = ?1;"
            ))?
            .query_row((id,), SQLiteTransactionStore::map_row)
            .map_err(not_found_if_no_rows)
    }

    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = lock(&self.connection)?;
        insert_transaction(new_transaction, &connection)
    }

    /// Create a transaction if the balance allows it.
    ///
    /// The balance check and the insert run in the same immediate transaction,
    /// so no other writer can change the balance in between.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InsufficientBalance] if the transaction is an expense larger than the balance,
    /// - [Error::AmountOutOfRange] if the balance is too large to compute,
    /// - or [Error::SqlError] there is some other SQL error.
    fn create_guarded(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut connection = lock(&self.connection)?;
        let sql_transaction = connection.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = match new_transaction.transaction_type {
            TransactionType::Income => Vec::new(),
            TransactionType::Expense => select_entries(&sql_transaction)?,
        };

        // Dropping the SQL transaction on rejection rolls it back.
        evaluate(new_transaction.entry(), &existing)?.into_result()?;

        let transaction = insert_transaction(new_transaction, &sql_transaction)?;
        sql_transaction.commit()?;

        Ok(transaction)
    }

    /// Update the fields of a transaction that are set in `patch`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NoFieldsToUpdate] if `patch` does not set any fields,
    /// - [Error::TransactionNotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn update(&self, id: DatabaseId, patch: TransactionPatch) -> Result<Transaction, Error> {
        if patch.is_empty() {
            return Err(Error::NoFieldsToUpdate);
        }

        let mut assignments = Vec::new();
        let mut params: Vec<&dyn ToSql> = Vec::new();

        if let Some(transaction_type) = &patch.transaction_type {
            assignments.push("type = ?");
            params.push(transaction_type);
        }

        if let Some(category) = &patch.category {
            assignments.push("category = ?");
            params.push(category);
        }

        if let Some(amount) = &patch.amount {
            assignments.push("amount = ?");
            params.push(amount);
        }

        if let Some(description) = &patch.description {
            assignments.push("description = ?");
            params.push(description);
        }

        params.push(&id);

        let query = format!(
            "UPDATE \"transaction\" SET {} WHERE id = ? RETURNING {TRANSACTION_COLUMNS};",
            assignments.join(", ")
        );

        lock(&self.connection)?
            .prepare(&query)?
            .query_row(params_from_iter(params), SQLiteTransactionStore::map_row)
            .map_err(not_found_if_no_rows)
    }

    /// Delete a transaction from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::TransactionNotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn delete(&self, id: DatabaseId) -> Result<Transaction, Error> {
        lock(&self.connection)?
            .prepare(&format!(
                "DELETE FROM \"transaction\" WHERE id = ?1 RETURNING {TRANSACTION_COLUMNS};"
            ))?
            .query_row((id,), SQLiteTransactionStore::map_row)
            .map_err(not_found_if_no_rows)
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                    id BLOB PRIMARY KEY,
                    type TEXT NOT NULL CHECK (type IN ('income', 'expense')),
                    category TEXT NOT NULL,
                    amount TEXT NOT NULL,
                    description TEXT,
                    created_at TEXT NOT NULL
                    );",
            (),
        )?;

        connection.execute(
            "CREATE INDEX IF NOT EXISTS idx_transaction_created_at
             ON \"transaction\"(created_at);",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let raw_category: String = row.get(offset + 2)?;

        Ok(Transaction {
            id: row.get(offset)?,
            transaction_type: row.get(offset + 1)?,
            category: CategoryLabel::new_unchecked(&raw_category),
            amount: row.get(offset + 3)?,
            description: row.get(offset + 4)?,
            created_at: row.get(offset + 5)?,
        })
    }
}
