//! Defines the app level error type and its conversion to JSON responses.
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;

use crate::response::failure;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A category was submitted without a name or a type.
    #[error("Name and type are required")]
    MissingCategoryFields,

    /// A transaction was submitted without a type, category or amount.
    #[error("Type, category, and amount are required")]
    MissingTransactionFields,

    /// A type other than "income" or "expense" was used.
    #[error("Type must be either income or expense")]
    InvalidTransactionType(String),

    /// An amount of zero or less was used for a transaction.
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    /// A sum of amounts does not fit in a decimal.
    #[error("Amount is out of range")]
    AmountOutOfRange,

    /// An empty (or whitespace only) string was used as a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// An empty (or whitespace only) string was used as a transaction's category.
    #[error("Transaction category cannot be empty")]
    EmptyCategoryLabel,

    /// An update request did not contain any fields to change.
    #[error("No fields to update")]
    NoFieldsToUpdate,

    /// A path parameter was not a valid UUID.
    #[error("Invalid ID format")]
    InvalidId(String),

    /// The request body or query string could not be parsed.
    ///
    /// The string holds the reason given by the JSON extractor.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// An expense was larger than the current balance.
    ///
    /// The client may try again with a smaller amount.
    #[error("Insufficient balance: {requested} requested but only {available} available")]
    InsufficientBalance {
        /// The balance before the expense.
        available: Decimal,
        /// The amount of the rejected expense.
        requested: Decimal,
    },

    /// The category name already exists in the database.
    #[error("Category already exists")]
    DuplicateCategoryName(String),

    /// Tried to delete a category that does not exist.
    #[error("Category not found")]
    CategoryNotFound,

    /// Tried to get, update or delete a transaction that does not exist.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequestBody(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequestBody(rejection.body_text())
    }
}

impl Error {
    /// The HTTP status code that this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingCategoryFields
            | Error::MissingTransactionFields
            | Error::InvalidTransactionType(_)
            | Error::NonPositiveAmount
            | Error::AmountOutOfRange
            | Error::EmptyCategoryName
            | Error::EmptyCategoryLabel
            | Error::NoFieldsToUpdate
            | Error::InvalidId(_)
            | Error::InvalidRequestBody(_)
            | Error::InsufficientBalance { .. }
            | Error::DuplicateCategoryName(_) => StatusCode::BAD_REQUEST,
            Error::CategoryNotFound | Error::TransactionNotFound | Error::NotFound => {
                StatusCode::NOT_FOUND
            }
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            // Store errors are not intended to be shown to the client.
            // This is the only place they are logged.
            tracing::error!("An unexpected error occurred: {}", self);
            return failure(
                status,
                "An unexpected error occurred, check the server logs for more details.",
            );
        }

        failure(status, &self.to_string())
    }
}
