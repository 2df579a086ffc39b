use axum::{
    extract::{Path, State},
    http::{HeaderMap, header::ACCEPT, header::CONTENT_TYPE},
    response::{IntoResponse, Response as AxumResponse},
};
use course_library_core::domain::{
    author::{
        ports::AuthorService,
        views::{AuthorFullView, AuthorView},
    },
    query::shaping::{has_fields, shape_data},
};
use uuid::Uuid;

use crate::application::http::{
    author::handlers::get_authors::with_links,
    author_collection::handlers::get_author_collection::{AuthorIds, fetch_author_collection},
    links::author_links,
    media_type::{AuthorRepresentation, negotiate_author},
    query_extractor::ResourceQuery,
    query_params::FieldsParameters,
    server::{
        api_entities::{
            api_error::ApiError,
            response::{Response, WithHeaders},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{author_id}",
    tag = "author",
    summary = "Get author",
    description = "A single author. The Accept header selects the friendly or full representation and whether links are included. A parenthesized id list, e.g. `(id1,id2)`, fetches several authors at once.",
    params(
        ("author_id" = String, Path, description = "Author id, or a parenthesized list of ids"),
        FieldsParameters
    ),
    responses(
        (status = 200, body = AuthorView),
        (status = 400, description = "Unparseable Accept header, unknown fields or malformed ids"),
        (status = 404, description = "Author not found"),
        (status = 406, description = "Unsupported representation")
    ),
)]
pub async fn get_author(
    Path(author_key): Path<String>,
    State(state): State<AppState>,
    ResourceQuery(params): ResourceQuery<FieldsParameters>,
    headers: HeaderMap,
) -> Result<AxumResponse, ApiError> {
    if let Some(ids) = AuthorIds::from_route_segment(&author_key) {
        return fetch_author_collection(&state, ids?)
            .await
            .map(IntoResponse::into_response);
    }

    let author_id = Uuid::parse_str(&author_key)
        .map_err(|_| ApiError::NotFound(format!("No author at '{}'", author_key)))?;

    let media_type = negotiate_author(headers.get(ACCEPT))?;
    let fields = params.fields.as_deref();

    let known_fields = match media_type.representation {
        AuthorRepresentation::Full => has_fields::<AuthorFullView>(fields),
        AuthorRepresentation::Friendly => has_fields::<AuthorView>(fields),
    };
    if !known_fields {
        return Err(ApiError::BadRequest(format!(
            "Unknown author fields in '{}'",
            fields.unwrap_or_default()
        )));
    }

    let author = state
        .service
        .get_author(author_id)
        .await
        .map_err(ApiError::from)?;

    let mut shaped = match media_type.representation {
        AuthorRepresentation::Full => shape_data(&AuthorFullView::from(&author), fields),
        AuthorRepresentation::Friendly => shape_data(&AuthorView::from(&author), fields),
    }
    .map_err(ApiError::from)?;

    if media_type.include_links {
        with_links(&mut shaped, author_links(state.root_path(), author.id, fields));
    }

    Ok(WithHeaders::new(Response::OK(shaped))
        .header(CONTENT_TYPE, media_type.content_type)
        .into_response())
}
