use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    author_collection_options::{__path_author_collection_options, author_collection_options},
    create_author_collection::{__path_create_author_collection, create_author_collection},
    get_author_collection::{__path_get_author_collection, get_author_collection},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_author_collection, create_author_collection, author_collection_options))]
pub struct AuthorCollectionApiDoc;

pub fn author_collection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/authorcollections", state.args.server.root_path),
            post(create_author_collection).options(author_collection_options),
        )
        .route(
            &format!("{}/api/authorcollections/{{ids}}", state.args.server.root_path),
            get(get_author_collection),
        )
}
