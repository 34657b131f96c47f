//! Request handlers for the REST routes.

pub mod board;
pub mod task;

use crate::{
    board::domain::{BoardDomainError, BoardId, TaskId, UserId},
    http::ApiError,
};
use axum::{Json, extract::FromRequest};
use serde::Serialize;

/// JSON body extractor whose rejections are reported as
/// [`ApiError::BadRequest`], so malformed bodies get the usual
/// `{"error": ...}` response with status 400.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Confirmation body for deletions.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// Human-readable confirmation.
    pub message: &'static str,
}

/// Service banner served at `/`.
#[derive(Debug, Serialize)]
pub struct Banner {
    /// Service name.
    pub service: &'static str,
    /// Routes offered by the service.
    pub endpoints: &'static [&'static str],
}

/// Returns the service banner.
pub async fn index() -> Json<Banner> {
    Json(Banner {
        service: "taskboard",
        endpoints: &[
            "GET /api/board",
            "POST /api/board",
            "GET /api/board/{boardId}",
            "PUT /api/board/{boardId}",
            "DELETE /api/board/{boardId}",
            "PUT /api/board/{boardId}/move",
            "GET /api/task",
            "POST /api/task",
            "PUT /api/task/{taskId}",
            "DELETE /api/task/{taskId}",
            "GET /ws",
        ],
    })
}

pub(crate) fn parse_board_id(raw: &str) -> Result<BoardId, BoardDomainError> {
    BoardId::parse(raw.trim())
}

pub(crate) fn parse_task_id(raw: &str) -> Result<TaskId, BoardDomainError> {
    TaskId::parse(raw.trim())
}

pub(crate) fn parse_user_ids(raw: &[String]) -> Result<Vec<UserId>, BoardDomainError> {
    raw.iter().map(|id| UserId::parse(id.trim())).collect()
}
