use axum::{extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Query string extractor whose rejection is an [`ApiError::BadRequest`].
///
/// ```rust,ignore
/// async fn handler(
///     ResourceQuery(params): ResourceQuery<AuthorsResourceParameters>,
/// ) -> Result<Response<Vec<AuthorView>>, ApiError> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ResourceQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let params = serde_urlencoded::from_str::<T>(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;

        Ok(ResourceQuery(params))
    }
}
