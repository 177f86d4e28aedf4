// HTTP mapping for application errors. Every error body has the shape
// {"detail": ...}; internal failures are logged and answered generically.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::products::core::validation::{FieldError, ValidationErrors};
use crate::modules::products::use_cases::errors::ApplicationError;

const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors.errors() })),
            )
                .into_response(),
            ApplicationError::AlreadyExists(_) => detail(StatusCode::CONFLICT, self.to_string()),
            ApplicationError::NotFound(_) => detail(StatusCode::NOT_FOUND, self.to_string()),
            ApplicationError::RateLimited { retry_after } => {
                let mut response = detail(StatusCode::TOO_MANY_REQUESTS, self.to_string());
                let seconds = retry_after.as_secs_f64().ceil().max(1.0) as u64;
                response
                    .headers_mut()
                    .insert(RETRY_AFTER, HeaderValue::from(seconds));
                response
            }
            ApplicationError::Unexpected(reason) => {
                tracing::error!(%reason, "request failed with an internal error");
                detail(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL)
            }
        }
    }
}

fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": message.into() }))).into_response()
}

/// Body that failed to parse (bad JSON, missing field, wrong type) is reported
/// like any other validation failure.
pub fn from_json_rejection(rejection: JsonRejection) -> ApplicationError {
    ApplicationError::Validation(ValidationErrors(vec![FieldError::malformed_body(
        rejection.body_text(),
    )]))
}
