use axum::extract::{Path, State};
use course_library_core::domain::author::ports::AuthorService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{author_id}",
    tag = "author",
    summary = "Delete author",
    description = "Deletes an author and every course it owns.",
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
    ),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn delete_author(
    Path(author_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    let author_id = Uuid::parse_str(&author_key)
        .map_err(|_| ApiError::NotFound(format!("No author at '{}'", author_key)))?;

    state
        .service
        .delete_author(author_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
