//! Totals of income, expenses and the resulting balance for reporting.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    Error,
    money::{Entry, TransactionType},
};

/// The totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all income.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    /// The sum of all expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    /// Total income minus total expense.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// Sum the income and expenses in `entries`.
///
/// The result does not depend on the order of `entries`.
///
/// # Errors
///
/// Returns an [Error::AmountOutOfRange] if a total or the balance does not fit in a [Decimal].
pub fn summarize(entries: &[Entry]) -> Result<Summary, Error> {
    let (total_income, total_expense) = entries.iter().try_fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expense), entry| match entry.transaction_type {
            TransactionType::Income => income
                .checked_add(entry.amount.value())
                .map(|income| (income, expense)),
            TransactionType::Expense => expense
                .checked_add(entry.amount.value())
                .map(|expense| (income, expense)),
        },
    )
    .ok_or(Error::AmountOutOfRange)?;

    let balance = total_income
        .checked_sub(total_expense)
        .ok_or(Error::AmountOutOfRange)?;

    Ok(Summary {
        total_income,
        total_expense,
        balance,
    })
}
