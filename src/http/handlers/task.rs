//! Task routes.

use super::{ApiJson, MessageBody, parse_board_id, parse_task_id};
use crate::{
    board::{
        domain::{ListTitle, TaskView},
        services::{CreateTaskRequest, UpdateTaskRequest},
    },
    http::{ApiError, AppState, AuthenticatedUser},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/task`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Board receiving the task.
    pub board_id: String,
    /// Initial list; `inbox` when omitted.
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `PUT /api/task/{taskId}`. Absent fields are left unchanged.
///
/// Only the text is editable; a `status` field is ignored because list
/// placement changes only through a move.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// New task title.
    #[serde(default)]
    pub title: Option<String>,
    /// New task description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of `GET /api/task`.
#[derive(Debug, Serialize)]
pub struct TaskListBody {
    /// Tasks owned by the caller.
    pub tasks: Vec<TaskView>,
}

/// `GET /api/task`
///
/// # Errors
///
/// Returns [`ApiError`] when the task store fails.
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<TaskListBody>, ApiError> {
    let tasks = state.tasks.list_tasks_for_user(user).await?;
    Ok(Json(TaskListBody {
        tasks: tasks.iter().map(TaskView::from).collect(),
    }))
}

/// `POST /api/task`
///
/// # Errors
///
/// Returns [`ApiError`] when the body is invalid, the board does not exist,
/// or the stores fail.
pub async fn create_task(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(body): ApiJson<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskView>), ApiError> {
    let board_id = parse_board_id(&body.board_id)?;
    let status = body
        .status
        .as_deref()
        .map(ListTitle::try_from)
        .transpose()?
        .unwrap_or_default();

    let request =
        CreateTaskRequest::new(user, board_id, body.title, body.description).with_status(status);
    let task = state.tasks.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(TaskView::from(&task))))
}

/// `PUT /api/task/{taskId}`
///
/// # Errors
///
/// Returns [`ApiError`] when the identifier is malformed, a new text is
/// blank, the task does not exist, or the stores fail.
pub async fn update_task(
    State(state): State<AppState>,
    AuthenticatedUser(_): AuthenticatedUser,
    Path(raw_task_id): Path<String>,
    ApiJson(body): ApiJson<UpdateTaskBody>,
) -> Result<Json<TaskView>, ApiError> {
    let mut request = UpdateTaskRequest::new(parse_task_id(&raw_task_id)?);
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let task = state.tasks.update_task(request).await?;
    Ok(Json(TaskView::from(&task)))
}

/// `DELETE /api/task/{taskId}`
///
/// # Errors
///
/// Returns [`ApiError`] when the identifier is malformed, the task does not
/// exist, or the stores fail.
pub async fn delete_task(
    State(state): State<AppState>,
    AuthenticatedUser(_): AuthenticatedUser,
    Path(raw_task_id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let task_id = parse_task_id(&raw_task_id)?;
    state.tasks.delete_task(task_id).await?;
    Ok(Json(MessageBody {
        message: "task deleted",
    }))
}
