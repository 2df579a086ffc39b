use axum::{
    extract::{Path, State},
    http::header::LOCATION,
};
use course_library_core::domain::course::{ports::CourseService, views::CourseView};
use uuid::Uuid;

use crate::application::http::{
    course::validators::CreateCourseValidator,
    links::course_path,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Response, WithHeaders},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "course",
    summary = "Create course for author",
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
    ),
    request_body = CreateCourseValidator,
    responses(
        (status = 201, body = CourseView),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn create_course(
    Path(author_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCourseValidator>,
) -> Result<WithHeaders<CourseView>, ApiError> {
    let course = state
        .service
        .create_course_for_author(author_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    let location = course_path(state.root_path(), author_id, course.id);

    Ok(WithHeaders::new(Response::Created(CourseView::from(course))).header(LOCATION, location))
}
