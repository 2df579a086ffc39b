use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::{HeaderMap, header::CONTENT_TYPE, header::LOCATION},
};
use course_library_core::domain::{
    author::{ports::AuthorService, views::AuthorView},
    query::shaping::{ShapedData, shape_data},
};

use crate::application::http::{
    author::{handlers::get_authors::with_links, validators::CreateAuthorValidator},
    links::{author_links, author_path},
    media_type::{AuthorCreationMediaType, negotiate_author_creation},
    server::{
        api_entities::{
            api_error::{ApiError, parse_and_validate},
            response::{Response, WithHeaders},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "author",
    summary = "Create author",
    description = "Creates an author together with its courses. `application/vnd.marvin.authorforcreationwithdateofdeath+json` also accepts a date of death.",
    request_body(
        content(
            (CreateAuthorValidator = "application/json"),
            (CreateAuthorValidator = "application/vnd.marvin.authorforcreation+json"),
            (CreateAuthorValidator = "application/vnd.marvin.authorforcreationwithdateofdeath+json")
        )
    ),
    responses(
        (status = 201, body = AuthorView),
        (status = 400, description = "Malformed body"),
        (status = 415, description = "Unsupported content type"),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<WithHeaders<ShapedData>, ApiError> {
    let media_type = negotiate_author_creation(headers.get(CONTENT_TYPE))?;
    let payload: CreateAuthorValidator = parse_and_validate(uri.path(), &body)?;

    let author = state
        .service
        .create_author(payload.into_input(media_type == AuthorCreationMediaType::WithDateOfDeath))
        .await
        .map_err(ApiError::from)?;

    let mut shaped = shape_data(&AuthorView::from(&author), None).map_err(ApiError::from)?;
    with_links(&mut shaped, author_links(state.root_path(), author.id, None));

    Ok(WithHeaders::new(Response::Created(shaped))
        .header(LOCATION, author_path(state.root_path(), author.id)))
}
