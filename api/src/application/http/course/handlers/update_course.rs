use axum::{
    extract::{Path, State},
    response::Response as AxumResponse,
};
use course_library_core::domain::course::{ports::CourseService, views::CourseView};
use uuid::Uuid;

use super::upsert_response;
use crate::application::http::{
    course::validators::UpdateCourseValidator,
    server::{
        api_entities::api_error::{ApiError, ValidateJson},
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{course_id}",
    tag = "course",
    summary = "Update course for author",
    description = "Replaces the course, or creates it under the given id when it does not exist.",
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    request_body = UpdateCourseValidator,
    responses(
        (status = 201, body = CourseView, description = "Course created under the given id"),
        (status = 204, description = "Course updated"),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn update_course(
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCourseValidator>,
) -> Result<AxumResponse, ApiError> {
    let outcome = state
        .service
        .upsert_course_for_author(author_id, course_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(upsert_response(state.root_path(), outcome))
}
