use axum::{
    extract::{OriginalUri, Path, State},
    response::Response as AxumResponse,
};
use course_library_core::domain::course::{ports::CourseService, views::CourseView};
use json_patch::Patch;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::upsert_response;
use crate::application::http::{
    course::validators::UpdateCourseValidator,
    server::{
        api_entities::api_error::{ApiError, FieldErrors, JsonBody},
        app_state::AppState,
    },
};

/// One RFC 6902 operation, documentation only.
#[derive(Debug, Serialize, ToSchema)]
pub struct PatchOperationSchema {
    /// `add`, `remove`, `replace`, `move`, `copy` or `test`.
    pub op: String,
    pub path: String,
    #[schema(value_type = Option<Object>)]
    pub value: Option<serde_json::Value>,
    pub from: Option<String>,
}

/// Apply a JSON Patch document to an update representation.
pub fn apply_patch(
    instance: &str,
    target: &UpdateCourseValidator,
    patch: &Patch,
) -> Result<UpdateCourseValidator, ApiError> {
    let invalid = |message: String| ApiError::Validation {
        instance: instance.to_string(),
        errors: FieldErrors::from([("patch".to_string(), vec![message])]),
    };

    let mut document =
        serde_json::to_value(target).map_err(|e| ApiError::InternalServerError(e.to_string()))?;
    json_patch::patch(&mut document, patch).map_err(|e| invalid(e.to_string()))?;

    let patched: UpdateCourseValidator =
        serde_json::from_value(document).map_err(|e| invalid(e.to_string()))?;
    patched
        .validate()
        .map_err(|e| ApiError::validation(instance, &e))?;

    Ok(patched)
}

#[utoipa::path(
    patch,
    path = "/{course_id}",
    tag = "course",
    summary = "Partially update course for author",
    description = "Applies a JSON Patch (RFC 6902) document to the course. A missing course is created under the given id from a patched empty representation.",
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    request_body(content = Vec<PatchOperationSchema>, content_type = "application/json-patch+json"),
    responses(
        (status = 201, body = CourseView, description = "Course created under the given id"),
        (status = 204, description = "Course updated"),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Patched course is invalid")
    ),
)]
pub async fn patch_course(
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(patch): JsonBody<Patch>,
) -> Result<AxumResponse, ApiError> {
    let existing = state
        .service
        .find_course_for_author(author_id, course_id)
        .await
        .map_err(ApiError::from)?;

    let target = existing
        .as_ref()
        .map(UpdateCourseValidator::from)
        .unwrap_or_default();
    let patched = apply_patch(uri.path(), &target, &patch)?;

    let outcome = state
        .service
        .upsert_course_for_author(author_id, course_id, patched.into())
        .await
        .map_err(ApiError::from)?;

    Ok(upsert_response(state.root_path(), outcome))
}
