use axum::{
    Json,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
    NoContent,
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Response::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// A [`Response`] with extra headers, e.g. `Location` or a negotiated `Content-Type`.
pub struct WithHeaders<T: Serialize> {
    headers: HeaderMap,
    response: Response<T>,
}

impl<T: Serialize> WithHeaders<T> {
    pub fn new(response: Response<T>) -> Self {
        Self {
            headers: HeaderMap::new(),
            response,
        }
    }

    pub fn header(mut self, name: HeaderName, value: impl AsRef<str>) -> Self {
        match HeaderValue::from_str(value.as_ref()) {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(e) => warn!("Dropping invalid {} header value: {}", name, e),
        }
        self
    }
}

impl<T: Serialize> IntoResponse for WithHeaders<T> {
    fn into_response(self) -> AxumResponse {
        (self.headers, self.response).into_response()
    }
}
