//! Board routes.

use super::{ApiJson, MessageBody, parse_board_id, parse_task_id, parse_user_ids};
use crate::{
    board::{
        domain::BoardView,
        services::{CreateBoardRequest, MoveTaskRequest, UpdateBoardRequest},
    },
    http::{ApiError, AppState, AuthenticatedUser},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Body of `POST /api/board`.
#[derive(Debug, Deserialize)]
pub struct CreateBoardBody {
    /// Board title.
    pub title: String,
    /// Additional member identifiers.
    #[serde(default)]
    pub members: Vec<String>,
}

/// Body of `PUT /api/board/{boardId}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBoardBody {
    /// New board title.
    #[serde(default)]
    pub title: Option<String>,
    /// New member identifiers; the owner is always kept.
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

impl UpdateBoardBody {
    /// Validates the body against the board named in the path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] when an identifier is malformed.
    pub fn into_request(self, path_board_id: &str) -> Result<UpdateBoardRequest, ApiError> {
        let mut request = UpdateBoardRequest::new(parse_board_id(path_board_id)?);
        if let Some(title) = self.title {
            request = request.with_title(title);
        }
        if let Some(members) = self.members {
            request = request.with_members(parse_user_ids(&members)?);
        }
        Ok(request)
    }
}

/// Body of `PUT /api/board/{boardId}/move`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskBody {
    /// Board identifier; must match the path when present.
    #[serde(default)]
    pub board_id: Option<String>,
    /// Task being moved.
    pub task_id: String,
    /// Source list hint.
    pub from_list: String,
    /// Destination list title.
    pub to_list: String,
    /// Insertion index in the destination list.
    pub insert_at: usize,
}

impl MoveTaskBody {
    /// Validates the body against the board named in the path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] when an identifier is malformed or
    /// the body names a different board than the path.
    pub fn into_request(self, path_board_id: &str) -> Result<MoveTaskRequest, ApiError> {
        let board_id = parse_board_id(path_board_id)?;
        let body_board_id = self.board_id.as_deref().map(parse_board_id).transpose()?;
        if body_board_id.is_some_and(|id| id != board_id) {
            return Err(ApiError::BadRequest(
                "boardId in body does not match the path".to_owned(),
            ));
        }
        let task_id = parse_task_id(&self.task_id)?;

        Ok(MoveTaskRequest::new(
            board_id,
            task_id,
            self.from_list,
            self.to_list,
            self.insert_at,
        ))
    }
}

/// `GET /api/board`
///
/// # Errors
///
/// Returns [`ApiError`] when the stores fail.
pub async fn list_boards(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<BoardView>>, ApiError> {
    Ok(Json(state.lifecycle.list_boards_for_user(user).await?))
}

/// `POST /api/board`
///
/// # Errors
///
/// Returns [`ApiError`] when validation or persistence fails.
pub async fn create_board(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(body): ApiJson<CreateBoardBody>,
) -> Result<(StatusCode, Json<BoardView>), ApiError> {
    let members = parse_user_ids(&body.members)?;
    let request = CreateBoardRequest::new(user, body.title).with_members(members);
    let view = state.lifecycle.create_board(request).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `GET /api/board/{boardId}`
///
/// # Errors
///
/// Returns [`ApiError`] when the identifier is malformed or the board does
/// not exist.
pub async fn get_board(
    State(state): State<AppState>,
    AuthenticatedUser(_): AuthenticatedUser,
    Path(raw_board_id): Path<String>,
) -> Result<Json<BoardView>, ApiError> {
    let board_id = parse_board_id(&raw_board_id)?;
    Ok(Json(state.lifecycle.get_board(board_id).await?))
}

/// `PUT /api/board/{boardId}`
///
/// # Errors
///
/// Returns [`ApiError`] when the body is invalid, the board does not exist,
/// or the stores fail.
pub async fn update_board(
    State(state): State<AppState>,
    AuthenticatedUser(_): AuthenticatedUser,
    Path(raw_board_id): Path<String>,
    ApiJson(body): ApiJson<UpdateBoardBody>,
) -> Result<Json<BoardView>, ApiError> {
    let request = body.into_request(&raw_board_id)?;
    Ok(Json(state.lifecycle.update_board(request).await?))
}

/// `DELETE /api/board/{boardId}`
///
/// Also closes the board's realtime channel.
///
/// # Errors
///
/// Returns [`ApiError`] when the identifier is malformed or the board does
/// not exist.
pub async fn delete_board(
    State(state): State<AppState>,
    AuthenticatedUser(_): AuthenticatedUser,
    Path(raw_board_id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let board_id = parse_board_id(&raw_board_id)?;
    state.lifecycle.delete_board(board_id).await?;
    state.channels.close(board_id);
    Ok(Json(MessageBody {
        message: "board deleted",
    }))
}

/// `PUT /api/board/{boardId}/move`
///
/// Responds with the expanded board and publishes it to the board channel.
///
/// # Errors
///
/// Returns [`ApiError`] when the body is invalid, an identifier does not
/// resolve, the destination list does not exist, or the stores fail.
pub async fn move_task(
    State(state): State<AppState>,
    AuthenticatedUser(_): AuthenticatedUser,
    Path(raw_board_id): Path<String>,
    ApiJson(body): ApiJson<MoveTaskBody>,
) -> Result<Json<BoardView>, ApiError> {
    let request = body.into_request(&raw_board_id)?;
    Ok(Json(state.sync.move_and_broadcast(request).await?))
}
