use axum::extract::{Path, State};
use course_library_core::domain::author::{
    ports::AuthorService, value_objects::GetAuthorCollectionInput, views::AuthorView,
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Ids taken from a `({id1},{id2},...)` route segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorIds(pub Vec<Uuid>);

impl AuthorIds {
    /// `None` when the segment is not parenthesized, i.e. not an id list at all.
    pub fn from_route_segment(segment: &str) -> Option<Result<Self, ApiError>> {
        let inner = segment.strip_prefix('(')?.strip_suffix(')')?;

        Some(Self::parse(inner))
    }

    fn parse(inner: &str) -> Result<Self, ApiError> {
        let ids = inner
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                Uuid::parse_str(id)
                    .map_err(|_| ApiError::BadRequest(format!("'{}' is not a valid author id", id)))
            })
            .collect::<Result<Vec<Uuid>, ApiError>>()?;

        if ids.is_empty() {
            return Err(ApiError::BadRequest("No author ids given".to_string()));
        }

        Ok(AuthorIds(ids))
    }
}

pub async fn fetch_author_collection(
    state: &AppState,
    AuthorIds(ids): AuthorIds,
) -> Result<Response<Vec<AuthorView>>, ApiError> {
    let authors = state
        .service
        .get_author_collection(GetAuthorCollectionInput { ids })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(authors.iter().map(AuthorView::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{ids}",
    tag = "author",
    summary = "Get author collection",
    description = "Fetches every author of a parenthesized id list. Fails unless every id resolves.",
    params(
        ("ids" = String, Path, description = "Parenthesized, comma separated author ids, e.g. `(id1,id2)`"),
    ),
    responses(
        (status = 200, body = Vec<AuthorView>),
        (status = 400, description = "Malformed or empty id list"),
        (status = 404, description = "At least one author was not found")
    ),
)]
pub async fn get_author_collection(
    Path(segment): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<AuthorView>>, ApiError> {
    let ids = AuthorIds::from_route_segment(&segment)
        .unwrap_or_else(|| AuthorIds::parse(&segment))?;

    fetch_author_collection(&state, ids).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parenthesized_ids() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let segment = format!("({}, {})", first, second);

        let ids = AuthorIds::from_route_segment(&segment).unwrap().unwrap();

        assert_eq!(ids, AuthorIds(vec![first, second]));
    }

    #[test]
    fn test_plain_segment_is_not_a_list() {
        assert!(AuthorIds::from_route_segment(&Uuid::new_v4().to_string()).is_none());
    }

    #[test]
    fn test_invalid_or_empty_lists_are_rejected() {
        assert!(matches!(
            AuthorIds::from_route_segment("(nope)"),
            Some(Err(ApiError::BadRequest(_)))
        ));
        assert!(matches!(
            AuthorIds::from_route_segment("( , )"),
            Some(Err(ApiError::BadRequest(_)))
        ));
    }
}
