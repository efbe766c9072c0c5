//! Mapping from domain failures to HTTP responses.
//!
//! Every failure leaves the API as `{"error": "<message>"}`. Validation
//! failures keep their message and become `400`, lookup misses become `404`,
//! and anything else is logged and hidden behind a generic `500`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use services::ServiceError;
use std::any::Any;

pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Carries the internal detail for the log; never sent to the client.
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingField(msg)
            | ServiceError::InvalidField(msg)
            | ServiceError::InvalidReference(msg)
            | ServiceError::DuplicateRecord(msg)
            | ServiceError::InvalidTransition(msg) => ApiError::BadRequest(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Unexpected(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        // Missing or mismatched route params are wiring bugs, not bad input.
        if rejection.status().is_server_error() {
            ApiError::Internal(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Unhandled error while serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.into())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Fallback for unmatched paths and unsupported methods.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND_MESSAGE.into())
}

/// Turns a handler panic into the generic 500 body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
