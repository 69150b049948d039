//! Defines the transaction store trait.

use crate::{
    Error,
    balance::evaluate,
    database_id::DatabaseId,
    money::{Entry, TransactionType},
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

/// Handles the creation, retrieval, update and deletion of transactions.
pub trait TransactionStore {
    /// Get the type and amount of every stored transaction, unfiltered.
    fn entries(&self) -> Result<Vec<Entry>, Error>;

    /// Get all transactions, newest first.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Get a transaction by its ID.
    ///
    /// # Errors
    /// Returns an [Error::TransactionNotFound] if `id` does not refer to a stored transaction.
    fn get(&self, id: DatabaseId) -> Result<Transaction, Error>;

    /// Store a transaction without checking the balance.
    ///
    /// The store assigns the ID and creation time.
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Store a transaction if the balance allows it.
    ///
    /// Expenses are checked against the balance of all stored transactions
    /// with [evaluate] before anything is written.
    ///
    /// The default implementation reads the balance and then writes in two
    /// separate steps, so two concurrent expenses can both pass the check and
    /// together overdraw the balance. Implementations that can check and write
    /// atomically should override this method.
    ///
    /// # Errors
    /// Returns an [Error::InsufficientBalance] if the transaction is an expense
    /// larger than the current balance, or an [Error::AmountOutOfRange] if the
    /// current balance is too large to compute.
    fn create_guarded(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let existing = match new_transaction.transaction_type {
            TransactionType::Income => Vec::new(),
            TransactionType::Expense => self.entries()?,
        };

        evaluate(new_transaction.entry(), &existing)?.into_result()?;

        self.create(new_transaction)
    }

    /// Change the fields set in `patch`.
    ///
    /// # Errors
    /// Returns an [Error::TransactionNotFound] if `id` does not refer to a stored transaction,
    /// or an [Error::NoFieldsToUpdate] if `patch` is empty.
    fn update(&self, id: DatabaseId, patch: TransactionPatch) -> Result<Transaction, Error>;

    /// Delete a transaction and return it.
    ///
    /// # Errors
    /// Returns an [Error::TransactionNotFound] if `id` does not refer to a stored transaction.
    fn delete(&self, id: DatabaseId) -> Result<Transaction, Error>;
}
