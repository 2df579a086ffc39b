use axum::http::{StatusCode, header::ALLOW};
use axum::response::IntoResponse;

pub const ALLOWED_METHODS: &str = "GET,OPTIONS,POST";

#[utoipa::path(
    options,
    path = "",
    tag = "author",
    summary = "Author collection options",
    responses(
        (status = 200, description = "Supported methods in the Allow header")
    ),
)]
pub async fn author_options() -> impl IntoResponse {
    (StatusCode::OK, [(ALLOW, ALLOWED_METHODS)])
}
