pub mod create_course;
pub mod delete_course;
pub mod get_course;
pub mod get_courses;
pub mod patch_course;
pub mod update_course;

use axum::{http::header::LOCATION, response::IntoResponse, response::Response as AxumResponse};
use course_library_core::domain::course::{value_objects::UpsertOutcome, views::CourseView};

use crate::application::http::{
    links::course_path,
    server::api_entities::response::{Response, WithHeaders},
};

pub const COURSES_CACHE_CONTROL: &str = "public, max-age=240";
pub const COURSE_CACHE_CONTROL: &str = "public, max-age=120";

/// 201 with a `Location` for a created course, 204 for an updated one.
pub(crate) fn upsert_response(root_path: &str, outcome: UpsertOutcome) -> AxumResponse {
    match outcome {
        UpsertOutcome::Created(course) => {
            let location = course_path(root_path, course.author_id, course.id);
            WithHeaders::new(Response::Created(CourseView::from(course)))
                .header(LOCATION, location)
                .into_response()
        }
        UpsertOutcome::Updated(_) => Response::<()>::NoContent.into_response(),
    }
}
