//! Core transaction domain types and request validation.

use std::fmt::Display;

use rusqlite::types::{ToSql, ToSqlOutput};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::DatabaseId,
    money::{Amount, Entry, TransactionType},
};

/// The free-form category label of a transaction, e.g. "Groceries".
///
/// Unlike [Category](crate::category::Category), the label is not linked to the
/// category set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    /// Create a category label, removing surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryLabel] if `label` is empty after trimming.
    pub fn new(label: &str) -> Result<Self, Error> {
        let label = label.trim();

        if label.is_empty() {
            Err(Error::EmptyCategoryLabel)
        } else {
            Ok(Self(label.to_owned()))
        }
    }

    /// Create a category label without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl AsRef<str> for CategoryLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for CategoryLabel {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.as_str()))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: DatabaseId,
    /// Whether money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// What the money was earned or spent on.
    pub category: CategoryLabel,
    /// The amount of money spent or earned in this transaction.
    pub amount: Amount,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// When the transaction was recorded, assigned by the store.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// The part of the transaction that affects the balance.
    pub fn entry(&self) -> Entry {
        Entry {
            transaction_type: self.transaction_type,
            amount: self.amount,
        }
    }
}

/// A validated transaction that has not been stored yet.
///
/// To create a new `NewTransaction` in tests, use [NewTransaction::income] or
/// [NewTransaction::expense].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether money was earned or spent.
    pub transaction_type: TransactionType,
    /// What the money was earned or spent on.
    pub category: CategoryLabel,
    /// The amount of money spent or earned.
    pub amount: Amount,
    /// An optional note about the transaction.
    pub description: Option<String>,
}

impl NewTransaction {
    /// Create a new income transaction without a description.
    pub fn income(amount: Amount, category: &str) -> Self {
        Self {
            transaction_type: TransactionType::Income,
            category: CategoryLabel::new_unchecked(category),
            amount,
            description: None,
        }
    }

    /// Create a new expense transaction without a description.
    pub fn expense(amount: Amount, category: &str) -> Self {
        Self {
            transaction_type: TransactionType::Expense,
            category: CategoryLabel::new_unchecked(category),
            amount,
            description: None,
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_owned);
        self
    }

    /// The part of the transaction that the balance check looks at.
    pub fn entry(&self) -> Entry {
        Entry {
            transaction_type: self.transaction_type,
            amount: self.amount,
        }
    }
}

/// A partial update to a stored transaction. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    /// The new type.
    pub transaction_type: Option<TransactionType>,
    /// The new category label.
    pub category: Option<CategoryLabel>,
    /// The new amount.
    pub amount: Option<Amount>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl TransactionPatch {
    /// Whether the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.transaction_type.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }
}

/// Request body for creating a transaction.
///
/// Fields are optional so that missing fields are reported with a helpful message
/// instead of a deserialization error. The amount may be sent as a JSON number
/// or a decimal string.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// What the money was earned or spent on.
    pub category: Option<String>,
    /// The amount, which must be greater than zero.
    pub amount: Option<Decimal>,
    /// An optional note.
    pub description: Option<String>,
}

impl TransactionForm {
    /// Check the form and convert it into a [NewTransaction].
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::MissingTransactionFields] if the type, category or amount is missing or blank,
    /// - [Error::InvalidTransactionType] if the type is not "income" or "expense",
    /// - or [Error::NonPositiveAmount] if the amount is not greater than zero.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let transaction_type = self
            .transaction_type
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        let category = self.category.as_deref().map(str::trim).unwrap_or_default();

        let Some(amount) = self.amount else {
            return Err(Error::MissingTransactionFields);
        };

        if transaction_type.is_empty() || category.is_empty() {
            return Err(Error::MissingTransactionFields);
        }

        Ok(NewTransaction {
            transaction_type: transaction_type.parse()?,
            category: CategoryLabel::new(category)?,
            amount: Amount::new(amount)?,
            description: normalize_description(self.description),
        })
    }
}

/// Request body for updating a transaction. Only the fields present are changed.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TransactionUpdateForm {
    /// Either "income" or "expense".
    #[serde(rename = "type", default)]
    pub transaction_type: Option<String>,
    /// What the money was earned or spent on.
    #[serde(default)]
    pub category: Option<String>,
    /// The amount, which must be greater than zero.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// `Some(None)` when the client sent `"description": null`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl TransactionUpdateForm {
    /// Check the fields that are present and convert the form into a [TransactionPatch].
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::NoFieldsToUpdate] if no field is present,
    /// - [Error::InvalidTransactionType] if the type is not "income" or "expense",
    /// - [Error::EmptyCategoryLabel] if the category is blank,
    /// - or [Error::NonPositiveAmount] if the amount is not greater than zero.
    pub fn validate(self) -> Result<TransactionPatch, Error> {
        let patch = TransactionPatch {
            transaction_type: self
                .transaction_type
                .as_deref()
                .map(str::parse::<TransactionType>)
                .transpose()?,
            category: self
                .category
                .as_deref()
                .map(CategoryLabel::new)
                .transpose()?,
            amount: self.amount.map(Amount::new).transpose()?,
            description: self.description.map(normalize_description),
        };

        if patch.is_empty() {
            return Err(Error::NoFieldsToUpdate);
        }

        Ok(patch)
    }
}

/// Trim a description and treat an empty one as absent.
fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|description| description.trim().to_owned())
        .filter(|description| !description.is_empty())
}

/// Distinguishes a field explicitly set to `null` from a missing field.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}


#[cfg(test)]
mod transaction_update_form_tests {
    use rust_decimal::Decimal;

    use crate::{
        Error,
        money::{Amount, TransactionType},
        transaction::{CategoryLabel, TransactionPatch, TransactionUpdateForm},
    };

    #[test]
    fn empty_form_has_no_fields_to_update() {
        let form: TransactionUpdateForm = serde_json::from_str("{}").unwrap();

        assert_eq!(form.validate(), Err(Error::NoFieldsToUpdate));
    }

    #[test]
    fn missing_description_is_left_unchanged() {
        let form: TransactionUpdateForm = serde_json::from_str(r#"{"amount": 5}"#).unwrap();

        assert_eq!(
            form.validate(),
            Ok(TransactionPatch {
                amount: Some(Amount::new(Decimal::from(5)).unwrap()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn null_description_clears_it() {
        let form: TransactionUpdateForm =
            serde_json::from_str(r#"{"description": null}"#).unwrap();

        assert_eq!(
            form.validate(),
            Ok(TransactionPatch {
                description: Some(None),
                ..Default::default()
            })
        );
    }

    #[test]
    fn validates_present_fields() {
        let form: TransactionUpdateForm =
            serde_json::from_str(r#"{"type": "income", "category": " Gifts "}"#).unwrap();

        assert_eq!(
            form.validate(),
            Ok(TransactionPatch {
                transaction_type: Some(TransactionType::Income),
                category: Some(CategoryLabel::new_unchecked("Gifts")),
                ..Default::default()
            })
        );
    }

    #[test]
    fn rejects_zero_amount() {
        let form: TransactionUpdateForm = serde_json::from_str(r#"{"amount": 0}"#).unwrap();

        assert_eq!(form.validate(), Err(Error::NonPositiveAmount));
    }

    #[test]
    fn rejects_blank_category() {
        let form: TransactionUpdateForm = serde_json::from_str(r#"{"category": ""}"#).unwrap();

        assert_eq!(form.validate(), Err(Error::EmptyCategoryLabel));
    }
}
