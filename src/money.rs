//! Core money types shared by the balance rules, the stores and the endpoints.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. wages.
    Income,
    /// Money going out, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The lowercase name used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}

/// A validated, strictly positive amount of money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Amount {
    /// Create an amount.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NonPositiveAmount] if `value` is zero or negative.
    pub fn new(value: Decimal) -> Result<Self, Error> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(Error::NonPositiveAmount)
        }
    }

    /// Create an amount without validation.
    ///
    /// The caller should ensure that `value` is greater than zero, e.g. because
    /// it was read back from the database where it was validated on the way in.
    pub fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// The amount as a decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;

        Amount::new(value).map_err(serde::de::Error::custom)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Amounts are stored as decimal text so they survive the round trip exactly.
impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let decimal = match value {
            ValueRef::Text(_) => Decimal::from_str(value.as_str()?)
                .map_err(|error| FromSqlError::Other(Box::new(error)))?,
            ValueRef::Integer(integer) => Decimal::from(integer),
            ValueRef::Real(real) => Decimal::from_str(&real.to_string())
                .map_err(|error| FromSqlError::Other(Box::new(error)))?,
            _ => return Err(FromSqlError::InvalidType),
        };

        Ok(Amount::new_unchecked(decimal))
    }
}

/// The part of a transaction that the balance rules care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Whether the amount was earned or spent.
    pub transaction_type: TransactionType,
    /// How much was earned or spent.
    pub amount: Amount,
}

impl Entry {
    /// Create an income entry.
    pub fn income(amount: Amount) -> Self {
        Self {
            transaction_type: TransactionType::Income,
            amount,
        }
    }

    /// Create an expense entry.
    pub fn expense(amount: Amount) -> Self {
        Self {
            transaction_type: TransactionType::Expense,
            amount,
        }
    }

    /// The signed effect this entry has on the balance.
    pub fn signed_value(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Income => self.amount.value(),
            TransactionType::Expense => -self.amount.value(),
        }
    }
}

#[cfg(test)]
mod transaction_type_tests {
    use crate::{Error, money::TransactionType};

    #[test]
    fn parses_income_and_expense() {
        assert_eq!("income".parse(), Ok(TransactionType::Income));
        assert_eq!("expense".parse(), Ok(TransactionType::Expense));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" expense\n".parse(), Ok(TransactionType::Expense));
    }

    #[test]
    fn parse_fails_on_unknown_type() {
        let result = "Income".parse::<TransactionType>();

        assert_eq!(
            result,
            Err(Error::InvalidTransactionType("Income".to_owned()))
        );
    }

    #[test]
    fn serializes_as_lowercase() {
        let json = serde_json::to_string(&TransactionType::Expense).unwrap();

        assert_eq!(json, "\"expense\"");
    }
}
