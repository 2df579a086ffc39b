use axum::{
    extract::{OriginalUri, State},
    http::header::LOCATION,
};
use course_library_core::domain::author::{ports::AuthorService, views::AuthorView};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    author::validators::CreateAuthorValidator,
    links::author_collection_path,
    server::{
        api_entities::{
            api_error::{ApiError, FieldErrors, JsonBody, collect_validation_errors},
            response::{Response, WithHeaders},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "author",
    summary = "Create author collection",
    description = "Creates several authors in one transaction.",
    request_body = Vec<CreateAuthorValidator>,
    responses(
        (status = 201, body = Vec<AuthorView>),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn create_author_collection(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(payload): JsonBody<Vec<CreateAuthorValidator>>,
) -> Result<WithHeaders<Vec<AuthorView>>, ApiError> {
    let mut errors = FieldErrors::new();
    for (index, author) in payload.iter().enumerate() {
        if let Err(e) = author.validate() {
            collect_validation_errors(&format!("[{}]", index), &e, &mut errors);
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation {
            instance: uri.path().to_string(),
            errors,
        });
    }

    let authors = state
        .service
        .create_author_collection(
            payload
                .into_iter()
                .map(|author| author.into_input(false))
                .collect(),
        )
        .await
        .map_err(ApiError::from)?;

    let ids = authors.iter().map(|a| a.id).collect::<Vec<Uuid>>();
    let views = authors.iter().map(AuthorView::from).collect::<Vec<AuthorView>>();

    Ok(WithHeaders::new(Response::Created(views))
        .header(LOCATION, author_collection_path(state.root_path(), &ids)))
}
