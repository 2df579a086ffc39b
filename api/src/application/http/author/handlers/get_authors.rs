use axum::{
    extract::State,
    http::{
        HeaderMap, HeaderName,
        header::{ACCEPT, CONTENT_TYPE},
    },
    response::{IntoResponse, Response as AxumResponse},
};
use course_library_core::domain::{
    author::{
        entities::Author, ports::AuthorService, value_objects::GetAuthorsInput, views::AuthorView,
    },
    query::shaping::{ShapedData, has_fields, shape_collection},
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::http::{
    links::{LinkView, author_links, authors_links},
    media_type::{HATEOAS_JSON, wants_hateoas},
    query_extractor::ResourceQuery,
    query_params::AuthorsResourceParameters,
    server::{
        api_entities::{
            api_error::ApiError,
            response::{Response, WithHeaders},
        },
        app_state::AppState,
    },
};

pub const X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");

/// Link-augmented list returned for `application/vnd.marvin.hateoas+json`.
#[derive(Debug, Serialize, ToSchema)]
pub struct LinkedAuthorsResponse {
    #[schema(value_type = Vec<Object>)]
    pub value: Vec<ShapedData>,
    pub links: Vec<LinkView>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "author",
    summary = "List authors",
    description = "Filtered, sorted and paged authors. Paging metadata is returned in the X-Pagination header.",
    params(AuthorsResourceParameters),
    responses(
        (status = 200, body = Vec<AuthorView>),
        (status = 400, description = "Unknown orderBy or fields entry")
    ),
)]
pub async fn get_authors(
    State(state): State<AppState>,
    ResourceQuery(params): ResourceQuery<AuthorsResourceParameters>,
    headers: HeaderMap,
) -> Result<AxumResponse, ApiError> {
    let valid_order_by = state
        .service
        .property_mappings()
        .valid_mapping_exists::<AuthorView, Author>(params.order_by.as_deref())?;
    if !valid_order_by {
        return Err(ApiError::BadRequest(format!(
            "Cannot sort authors by '{}'",
            params.order_by.as_deref().unwrap_or_default()
        )));
    }

    if !has_fields::<AuthorView>(params.fields.as_deref()) {
        return Err(ApiError::BadRequest(format!(
            "Unknown author fields in '{}'",
            params.fields.as_deref().unwrap_or_default()
        )));
    }

    let include_links = wants_hateoas(headers.get(ACCEPT))?;

    let authors = state
        .service
        .get_authors(GetAuthorsInput {
            main_category: params.main_category.clone(),
            search_query: params.search_query.clone(),
            order_by: params.order_by.clone(),
            page: params.page_request(state.args.max_page_size),
        })
        .await
        .map_err(ApiError::from)?;

    let pagination = serde_json::to_string(&authors.metadata())
        .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    let views = authors.items.iter().map(AuthorView::from).collect::<Vec<_>>();
    let shaped = shape_collection(&views, params.fields.as_deref()).map_err(ApiError::from)?;

    if !include_links {
        return Ok(WithHeaders::new(Response::OK(shaped))
            .header(X_PAGINATION, pagination)
            .into_response());
    }

    let value = shaped
        .into_iter()
        .zip(views.iter())
        .map(|(mut author, view)| {
            with_links(&mut author, author_links(state.root_path(), view.id, None));
            author
        })
        .collect::<Vec<ShapedData>>();

    let body = LinkedAuthorsResponse {
        value,
        links: authors_links(state.root_path(), &params, &authors),
    };

    Ok(WithHeaders::new(Response::OK(body))
        .header(CONTENT_TYPE, HATEOAS_JSON)
        .header(X_PAGINATION, pagination)
        .into_response())
}

/// Append `links` to a shaped resource.
pub fn with_links(shaped: &mut ShapedData, links: Vec<LinkView>) {
    shaped.insert(
        "links",
        serde_json::to_value(links).unwrap_or(Value::Array(Vec::new())),
    );
}
