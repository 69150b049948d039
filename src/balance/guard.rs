//! Decides whether a new transaction may be recorded given the current balance.

use rust_decimal::Decimal;

use crate::{
    Error,
    money::{Entry, TransactionType},
};

/// The outcome of [evaluate].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The transaction may be recorded.
    Admit,
    /// The transaction must not be recorded.
    Reject(RejectReason),
}

/// Why a transaction was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The expense is larger than the money available.
    InsufficientBalance {
        /// The balance before the expense.
        available: Decimal,
        /// The amount of the rejected expense.
        requested: Decimal,
    },
}

impl Decision {
    /// Whether the transaction may be recorded.
    pub fn is_admit(&self) -> bool {
        matches!(self, Decision::Admit)
    }

    /// Convert a rejection into the matching [Error] so it can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InsufficientBalance] if the decision is
    /// [RejectReason::InsufficientBalance].
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Decision::Admit => Ok(()),
            Decision::Reject(RejectReason::InsufficientBalance {
                available,
                requested,
            }) => Err(Error::InsufficientBalance {
                available,
                requested,
            }),
        }
    }
}

/// Total income minus total expense over `entries`.
///
/// # Errors
///
/// Returns an [Error::AmountOutOfRange] if a running total does not fit in a [Decimal].
pub fn current_balance(entries: &[Entry]) -> Result<Decimal, Error> {
    entries
        .iter()
        .map(Entry::signed_value)
        .try_fold(Decimal::ZERO, |balance, value| {
            balance.checked_add(value).ok_or(Error::AmountOutOfRange)
        })
}

/// Decide whether `candidate` may be added to a ledger that already holds `existing`.
///
/// Income is always admitted. An expense is rejected when its amount is
/// strictly greater than the balance of `existing`, so spending exactly the
/// balance is allowed and leaves it at zero. `candidate` is not part of the
/// balance it is checked against.
///
/// # Errors
///
/// Returns an [Error::AmountOutOfRange] if the balance of `existing` cannot be computed.
pub fn evaluate(candidate: Entry, existing: &[Entry]) -> Result<Decision, Error> {
    if candidate.transaction_type == TransactionType::Income {
        return Ok(Decision::Admit);
    }

    let available = current_balance(existing)?;
    let requested = candidate.amount.value();

    if requested > available {
        tracing::debug!("rejecting expense of {requested}, only {available} available");

        Ok(Decision::Reject(RejectReason::InsufficientBalance {
            available,
            requested,
        }))
    } else {
        Ok(Decision::Admit)
    }
}
