//! Category deletion endpoint.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{database_id::parse_database_id, response::ok_message, stores::CategoryStore};

use super::CategoryState;

/// Handle category deletion. Responds with a success message or an error.
pub async fn delete_category_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<CategoryState>,
) -> Response {
    let category_id = match parse_database_id(&raw_id) {
        Ok(category_id) => category_id,
        Err(error) => return error.into_response(),
    };

    match state.category_store.delete(category_id) {
        Ok(category) => {
            tracing::info!("deleted category {} ({})", category.name, category.id);
            ok_message("Category deleted successfully")
        }
        Err(error) => error.into_response(),
    }
}
