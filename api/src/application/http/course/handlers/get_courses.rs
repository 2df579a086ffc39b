use axum::{
    extract::{Path, State},
    http::header::CACHE_CONTROL,
};
use course_library_core::domain::course::{ports::CourseService, views::CourseView};
use uuid::Uuid;

use super::COURSES_CACHE_CONTROL;
use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{Response, WithHeaders},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "course",
    summary = "Get courses for author",
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
    ),
    responses(
        (status = 200, body = Vec<CourseView>),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn get_courses(
    Path(author_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<WithHeaders<Vec<CourseView>>, ApiError> {
    let courses = state
        .service
        .get_courses_for_author(author_id)
        .await
        .map_err(ApiError::from)?;

    Ok(
        WithHeaders::new(Response::OK(courses.into_iter().map(CourseView::from).collect()))
            .header(CACHE_CONTROL, COURSES_CACHE_CONTROL),
    )
}
