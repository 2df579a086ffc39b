use axum::http::{StatusCode, header::ALLOW};
use axum::response::IntoResponse;

use crate::application::http::author::handlers::author_options::ALLOWED_METHODS;

#[utoipa::path(
    options,
    path = "",
    tag = "author",
    summary = "Author collection batch options",
    responses(
        (status = 200, description = "Supported methods in the Allow header")
    ),
)]
pub async fn author_collection_options() -> impl IntoResponse {
    (StatusCode::OK, [(ALLOW, ALLOWED_METHODS)])
}
