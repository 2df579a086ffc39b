use std::collections::BTreeMap;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use course_library_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "An unexpected fault happened. Try again later.";
pub const VALIDATION_PROBLEM_TYPE: &str = "https://courselibrary.com/modelvalidationproblem";
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Field path to messages, e.g. `courses[0].title`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    NotAcceptable(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    /// Body could not be read or parsed.
    #[error("invalid input on {instance}")]
    InvalidInput { instance: String, errors: FieldErrors },
    /// Body was parsed but breaks a validation rule.
    #[error("validation failed on {instance}")]
    Validation { instance: String, errors: FieldErrors },
    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

/// RFC 7807 problem document.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
    pub errors: FieldErrors,
}

impl ApiError {
    pub fn validation(instance: impl Into<String>, errors: &ValidationErrors) -> Self {
        let mut collected = FieldErrors::new();
        collect_validation_errors("", errors, &mut collected);

        ApiError::Validation {
            instance: instance.into(),
            errors: collected,
        }
    }

    pub fn invalid_input(
        instance: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ApiError::InvalidInput {
            instance: instance.into(),
            errors: FieldErrors::from([(field.into(), vec![message.into()])]),
        }
    }
}

/// Flatten nested validator output into dotted field paths.
pub fn collect_validation_errors(prefix: &str, errors: &ValidationErrors, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let path = match (prefix.is_empty(), field.as_ref()) {
            (true, "__all__") => "body".to_string(),
            (false, "__all__") => prefix.to_string(),
            (true, name) => camel_case(name),
            (false, name) => format!("{}.{}", prefix, camel_case(name)),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = out.entry(path).or_default();
                messages.extend(field_errors.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_validation_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validation_errors(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

fn camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;

    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::InvalidSortField(field) => {
                ApiError::BadRequest(format!("Cannot sort by unknown field '{}'", field))
            }
            CoreError::UnknownField(field) => {
                ApiError::BadRequest(format!("Unknown field '{}'", field))
            }
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::MappingNotFound { exposed, storage } => ApiError::InternalServerError(
                format!("No property mapping from {} to {}", exposed, storage),
            ),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

fn problem(
    status: StatusCode,
    problem_type: String,
    title: &str,
    instance: String,
    errors: FieldErrors,
) -> Response {
    let body = ProblemDetails {
        problem_type,
        title: title.to_string(),
        status: status.as_u16(),
        detail: "See the errors field for details.".to_string(),
        instance,
        errors,
    };

    (status, [(CONTENT_TYPE, PROBLEM_JSON)], Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", message),
            ApiError::NotAcceptable(message) => {
                (StatusCode::NOT_ACCEPTABLE, "E_NOT_ACCEPTABLE", message)
            }
            ApiError::UnsupportedMediaType(message) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "E_UNSUPPORTED_MEDIA_TYPE",
                message,
            ),
            ApiError::InvalidInput { instance, errors } => {
                return problem(
                    StatusCode::BAD_REQUEST,
                    "https://tools.ietf.org/html/rfc7231#section-6.5.1".to_string(),
                    "One or more errors on input occurred.",
                    instance,
                    errors,
                );
            }
            ApiError::Validation { instance, errors } => {
                return problem(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    VALIDATION_PROBLEM_TYPE.to_string(),
                    "One or more validation errors occurred.",
                    instance,
                    errors,
                );
            }
            ApiError::InternalServerError(cause) => {
                error!("Request failed: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E_INTERNAL_SERVER_ERROR",
                    INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Deserialize a JSON body into `T` and validate it.
///
/// Unparseable bodies are rejected with a 400 problem document, rule violations
/// with a 422 one.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_string();
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| ApiError::validation(instance, &e))?;

        Ok(ValidateJson(value))
    }
}

/// Deserialize a JSON body, rejecting failures with a 400 problem document.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_string();
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_input(instance, "body", rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}

/// Parse and validate a raw JSON body whose media type was negotiated by hand.
pub fn parse_and_validate<T>(instance: &str, body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body)
        .map_err(|e| ApiError::invalid_input(instance, "body", e.to_string()))?;
    value
        .validate()
        .map_err(|e| ApiError::validation(instance, &e))?;

    Ok(value)
}
