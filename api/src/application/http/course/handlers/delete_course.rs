use axum::extract::{Path, State};
use course_library_core::domain::course::ports::CourseService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{course_id}",
    tag = "course",
    summary = "Delete course for author",
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Author or course not found")
    ),
)]
pub async fn delete_course(
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_course_for_author(author_id, course_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
