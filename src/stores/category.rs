//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, NewCategory},
    database_id::DatabaseId,
    money::TransactionType,
};

/// Creates, lists and deletes categories.
pub trait CategoryStore {
    /// Get all categories ordered by name, optionally only those of `category_type`.
    fn get_all(&self, category_type: Option<TransactionType>) -> Result<Vec<Category>, Error>;

    /// Create a new category and add it to the store.
    ///
    /// # Errors
    /// Returns an [Error::DuplicateCategoryName] if a category with the same name exists.
    fn create(&self, new_category: NewCategory) -> Result<Category, Error>;

    /// Delete a category and return it.
    ///
    /// # Errors
    /// Returns an [Error::CategoryNotFound] if `id` does not refer to a stored category.
    fn delete(&self, id: DatabaseId) -> Result<Category, Error>;
}
