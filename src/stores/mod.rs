//! Contains traits and implementations for objects that store categories and transactions.

mod category;
mod transaction;

pub mod sqlite;

pub use category::CategoryStore;
pub use transaction::TransactionStore;
