use std::{any::Any, sync::Arc, sync::OnceLock};

use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, LOCATION},
    },
    response::{IntoResponse, Response},
    routing::get,
};
use axum_prometheus::{PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle};
use course_library_core::{application::create_service, domain::common::CourseLibraryConfig};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    author::router::author_routes,
    author_collection::router::author_collection_routes,
    course::router::course_routes,
    health::health_routes,
    root::root_routes,
    server::{api_entities::api_error::ApiError, app_state::AppState, openapi::ApiDoc},
};
use crate::args::{Args, Environment};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = CourseLibraryConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// Prometheus recorder is process global, install it once.
fn metrics_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    HANDLE
        .get_or_init(|| PrometheusMetricLayer::pair().1)
        .clone()
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        });

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION])
        .expose_headers([LOCATION, HeaderName::from_static("x-pagination")]);

    let prometheus_layer = PrometheusMetricLayer::new();
    let metric_handle = metrics_handle();

    let root_path = state.args.server.root_path.clone();

    let mut router = Router::new();

    if state.args.env == Environment::Development {
        let mut openapi = ApiDoc::openapi();
        let mut paths = openapi.paths.clone();
        paths.paths = openapi
            .paths
            .paths
            .into_iter()
            .map(|(path, item)| (format!("{}{path}", root_path), item))
            .collect();
        openapi.paths = paths;

        let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

        router = router
            .merge(Scalar::with_url(
                format!("{}/scalar", root_path),
                openapi.clone(),
            ))
            .merge(
                SwaggerUi::new(format!("{}/swagger-ui", root_path))
                    .url(api_docs_url.clone(), openapi.clone()),
            )
            .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
            .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)));
    }

    let router = router
        .merge(root_routes(state.clone()))
        .merge(author_routes(state.clone()))
        .merge(author_collection_routes(state.clone()))
        .merge(course_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state);

    Ok(router)
}
