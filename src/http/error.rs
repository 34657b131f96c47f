//! Error responses for the HTTP boundary.

use crate::board::{
    domain::{BoardDomainError, ParseListTitleError},
    services::{BoardServiceError, BoardServiceErrorKind},
};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned in place of storage failure details.
const STORAGE_FAILURE_MESSAGE: &str = "internal server error";

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The bearer token is missing, malformed, or fails verification.
    #[error("unauthorized")]
    Unauthorized,
    /// The request could not be decoded into a valid operation.
    #[error("{0}")]
    BadRequest(String),
    /// A board service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] BoardServiceError),
}

impl ApiError {
    /// Returns the status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(err) => match err.kind() {
                BoardServiceErrorKind::NotFound => StatusCode::NOT_FOUND,
                BoardServiceErrorKind::Validation => StatusCode::BAD_REQUEST,
                BoardServiceErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<BoardDomainError> for ApiError {
    fn from(err: BoardDomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ParseListTitleError> for ApiError {
    fn from(err: ParseListTitleError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed in storage");
            STORAGE_FAILURE_MESSAGE.to_owned()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
