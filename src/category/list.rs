//! Category listing endpoint.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};

use crate::{
    Error, category::CategoryQuery, money::TransactionType, response::ok, stores::CategoryStore,
};

use super::CategoryState;

/// List all categories ordered by name.
///
/// The optional `type` query parameter limits the list to income or expense categories.
pub async fn list_categories_endpoint(
    State(state): State<CategoryState>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Response {
    let filter = match parse_filter(query) {
        Ok(filter) => filter,
        Err(error) => return error.into_response(),
    };

    match state.category_store.get_all(filter) {
        Ok(categories) => ok(categories),
        Err(error) => error.into_response(),
    }
}

fn parse_filter(
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<Option<TransactionType>, Error> {
    let Query(query) = query?;

    query
        .category_type
        .as_deref()
        .map(str::trim)
        .filter(|category_type| !category_type.is_empty())
        .map(str::parse::<TransactionType>)
        .transpose()
}
