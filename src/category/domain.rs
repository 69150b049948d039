//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId, money::TransactionType};

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is empty after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A category for income or expenses (e.g., 'Salary', 'Groceries').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category, assigned by the store.
    pub id: DatabaseId,
    /// The unique name of the category.
    pub name: CategoryName,
    /// Whether the category is for income or expenses.
    #[serde(rename = "type")]
    pub category_type: TransactionType,
}

/// A validated category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// The unique name of the category.
    pub name: CategoryName,
    /// Whether the category is for income or expenses.
    pub category_type: TransactionType,
}

/// Request body for creating a category.
///
/// Fields are optional so that missing fields are reported with a helpful message
/// instead of a deserialization error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryForm {
    /// The category name.
    pub name: Option<String>,
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

impl CategoryForm {
    /// Check the form and convert it into a [NewCategory].
    ///
    /// # Errors
    ///
    /// Returns an [Error::MissingCategoryFields] if the name or type is missing or blank,
    /// or an [Error::InvalidTransactionType] if the type is not "income" or "expense".
    pub fn validate(self) -> Result<NewCategory, Error> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        let category_type = self
            .category_type
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();

        if name.is_empty() || category_type.is_empty() {
            return Err(Error::MissingCategoryFields);
        }

        Ok(NewCategory {
            name: CategoryName::new(name)?,
            category_type: category_type.parse()?,
        })
    }
}

/// Query parameters for listing categories.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    /// Only list categories of this type.
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, category::CategoryName};

    #[test]
    fn new_fails_on_empty_string() {
        let category_name = CategoryName::new("");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        let category_name = CategoryName::new("\n\t \r");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_trims_whitespace() {
        let category_name = CategoryName::new("  Groceries ").unwrap();

        assert_eq!(category_name.as_ref(), "Groceries");
    }
}
