use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    author_options::{__path_author_options, author_options},
    create_author::{__path_create_author, create_author},
    delete_author::{__path_delete_author, delete_author},
    get_author::{__path_get_author, get_author},
    get_authors::{__path_get_authors, get_authors},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_authors, get_author, create_author, delete_author, author_options))]
pub struct AuthorApiDoc;

pub fn author_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/authors", state.args.server.root_path),
            get(get_authors)
                .post(create_author)
                .options(author_options),
        )
        .route(
            &format!("{}/api/authors/{{author_id}}", state.args.server.root_path),
            get(get_author).delete(delete_author),
        )
}
