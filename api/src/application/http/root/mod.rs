use axum::{Router, extract::State, routing::get};
use utoipa::OpenApi;

use crate::application::http::{
    links::{LinkView, root_links},
    server::{api_entities::response::Response, app_state::AppState},
};

#[derive(OpenApi)]
#[openapi(paths(get_root))]
pub struct RootApiDoc;

#[utoipa::path(
    get,
    path = "",
    tag = "root",
    summary = "API entry point",
    description = "Links to the top level resources.",
    responses(
        (status = 200, body = Vec<LinkView>)
    ),
)]
pub async fn get_root(State(state): State<AppState>) -> Response<Vec<LinkView>> {
    Response::OK(root_links(state.root_path()))
}

pub fn root_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api", state.args.server.root_path),
        get(get_root),
    )
}
