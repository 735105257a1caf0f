//! Structured API errors.
//!
//! Every failure leaving the service is a `{code, message}` body with
//! the status the taxonomy prescribes: missing entities are 404,
//! uniqueness conflicts 409, bad client input 400, and classifier
//! outages 502.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use reviews_core::{CustomerError, ReviewError};

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn enum_value_invalid(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "ENUM_VALUE_INVALID", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                code: self.code.to_string(),
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        let (status, code) = match &err {
            CustomerError::NotFound(_) => (StatusCode::NOT_FOUND, "ENTITY_NOT_FOUND"),
            CustomerError::EmailTaken(_) | CustomerError::HasReviews(_) => {
                (StatusCode::CONFLICT, "CONFLICT_WITH_EXISTING_DATA")
            }
            CustomerError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "ARGUMENTS_INVALID"),
            CustomerError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        Self::new(status, code, err.to_string())
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::Customer(inner) => inner.into(),
            ReviewError::Classifier(inner) => Self::new(
                StatusCode::BAD_GATEWAY,
                "EXTERNAL_API_ERROR",
                format!("error while calling an external service: {}", inner),
            ),
            ReviewError::NotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                "ENTITY_NOT_FOUND",
                err.to_string(),
            ),
            ReviewError::InvalidArgument(_) => Self::new(
                StatusCode::BAD_REQUEST,
                "ARGUMENTS_INVALID",
                err.to_string(),
            ),
            ReviewError::Database(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "REQUEST_BODY_INVALID",
            rejection.body_text(),
        )
    }
}
