//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use uuid::Uuid;

use crate::{
    Error,
    category::{Category, CategoryName, NewCategory},
    database_id::DatabaseId,
    db::{CreateTable, MapRow},
    money::TransactionType,
    stores::CategoryStore,
};

use super::lock;

/// Creates, lists and deletes categories in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Retrieve categories in the database, ordered by name.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self, category_type: Option<TransactionType>) -> Result<Vec<Category>, Error> {
        lock(&self.connection)?
            .prepare(
                "SELECT id, name, type FROM category
                 WHERE ?1 IS NULL OR type = ?1
                 ORDER BY name ASC;",
            )?
            .query_map((category_type,), SQLiteCategoryStore::map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    /// Create a category in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DuplicateCategoryName] if a category with the same name exists,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&self, new_category: NewCategory) -> Result<Category, Error> {
        let id = Uuid::new_v4();

        lock(&self.connection)?
            .prepare(
                "INSERT INTO category (id, name, type) VALUES (?1, ?2, ?3)
                 RETURNING id, name, type;",
            )?
            .query_row(
                (id, new_category.name.as_ref(), new_category.category_type),
                SQLiteCategoryStore::map_row,
            )
            .map_err(|error| match error {
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error {
                        code: _,
                        extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
                    },
                    _,
                ) => Error::DuplicateCategoryName(new_category.name.to_string()),
                error => error.into(),
            })
    }

    /// Delete a category from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::CategoryNotFound] if `id` does not refer to a stored category,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&self, id: DatabaseId) -> Result<Category, Error> {
        lock(&self.connection)?
            .prepare("DELETE FROM category WHERE id = ?1 RETURNING id, name, type;")?
            .query_row((id,), SQLiteCategoryStore::map_row)
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::CategoryNotFound,
                error => error.into(),
            })
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id BLOB PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                type TEXT NOT NULL CHECK (type IN ('income', 'expense'))
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;

        let raw_name: String = row.get(offset + 1)?;
        let name = CategoryName::new_unchecked(&raw_name);

        let category_type = row.get(offset + 2)?;

        Ok(Self::ReturnType {
            id,
            name,
            category_type,
        })
    }
}
