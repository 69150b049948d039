//! Categories for income and expenses, and the endpoints for managing them.

mod create;
mod delete;
mod domain;
mod list;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryForm, CategoryName, CategoryQuery, NewCategory};
pub use list::list_categories_endpoint;

use axum::extract::FromRef;

use crate::{AppState, stores::sqlite::SQLiteCategoryStore};

/// The state needed by the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryState {
    /// The store for the category set.
    pub category_store: SQLiteCategoryStore,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            category_store: state.category_store.clone(),
        }
    }
}
