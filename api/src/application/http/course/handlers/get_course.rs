use axum::{
    extract::{Path, State},
    http::header::CACHE_CONTROL,
};
use course_library_core::domain::course::{ports::CourseService, views::CourseView};
use uuid::Uuid;

use super::COURSE_CACHE_CONTROL;
use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{Response, WithHeaders},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{course_id}",
    tag = "course",
    summary = "Get course for author",
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    responses(
        (status = 200, body = CourseView),
        (status = 404, description = "Author or course not found")
    ),
)]
pub async fn get_course(
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<WithHeaders<CourseView>, ApiError> {
    let course = state
        .service
        .get_course_for_author(author_id, course_id)
        .await
        .map_err(ApiError::from)?;

    Ok(WithHeaders::new(Response::OK(CourseView::from(course)))
        .header(CACHE_CONTROL, COURSE_CACHE_CONTROL))
}
