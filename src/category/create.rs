//! Category creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{Error, category::CategoryForm, response::created, stores::CategoryStore};

use super::CategoryState;

/// Handle a request to create a category. Responds with 201 and the new category.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    form: Result<Json<CategoryForm>, JsonRejection>,
) -> Response {
    let new_category = match form
        .map_err(Error::from)
        .and_then(|Json(form)| form.validate())
    {
        Ok(new_category) => new_category,
        Err(error) => return error.into_response(),
    };

    match state.category_store.create(new_category) {
        Ok(category) => {
            tracing::info!("created category {} ({})", category.name, category.id);
            created(category)
        }
        Err(error) => error.into_response(),
    }
}
