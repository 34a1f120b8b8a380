//! Axum-specific error types and mappings.
//!
//! `NotFound`, `BadRequest` and `Internal` are the adapter's own failures and
//! reach the client with their message. Everything else (process failures,
//! filesystem errors) is `Unhandled`: logged, and answered with a generic 500.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use procgate_core::{ContextError, ObjectError, ProcessError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error with a client-facing message.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Failure the adapter does not interpret.
    #[error("Unhandled error: {0}")]
    Unhandled(String),

    /// The request body is not a usable multipart form.
    #[error(transparent)]
    Rejection(#[from] MultipartRejection),

    /// The URL-encoded body could not be decoded.
    #[error(transparent)]
    Form(#[from] FormRejection),

    /// The multipart stream broke while it was being read.
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Self::Unhandled(msg) => {
                tracing::error!(error = %msg, "Unhandled error while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            Self::Rejection(rejection) => return rejection.into_response(),
            Self::Form(rejection) => return rejection.into_response(),
            Self::Multipart(err) => return err.into_response(),
        };

        (status, axum::Json(ErrorBody { detail })).into_response()
    }
}

impl From<ProcessError> for HttpError {
    fn from(err: ProcessError) -> Self {
        Self::Unhandled(err.to_string())
    }
}

impl From<ContextError> for HttpError {
    fn from(err: ContextError) -> Self {
        Self::Unhandled(err.to_string())
    }
}

impl From<ObjectError> for HttpError {
    fn from(err: ObjectError) -> Self {
        Self::Unhandled(err.to_string())
    }
}

impl From<std::io::Error> for HttpError {
    fn from(err: std::io::Error) -> Self {
        Self::Unhandled(err.to_string())
    }
}
