//! Reference expansion of stored boards.

use super::{BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{Board, BoardId, BoardView},
    ports::{BoardRepository, TaskRepository},
};

/// Resolves every task reference of `board` into a full task.
pub(crate) async fn expand_board<T>(tasks: &T, board: &Board) -> BoardServiceResult<BoardView>
where
    T: TaskRepository + ?Sized,
{
    let ids = board.task_ids();
    let resolved = tasks.find_many(&ids).await?;
    let view = BoardView::expand(board, &resolved);
    let dangling = ids.len().saturating_sub(view.task_count());
    if dangling > 0 {
        tracing::debug!(board_id = %board.id(), dangling, "board references unknown tasks");
    }
    Ok(view)
}

/// Loads `board_id` and expands it.
pub(crate) async fn load_expanded<B, T>(
    boards: &B,
    tasks: &T,
    board_id: BoardId,
) -> BoardServiceResult<BoardView>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    let board = boards
        .find_by_id(board_id)
        .await?
        .ok_or(BoardServiceError::BoardNotFound(board_id))?;
    expand_board(tasks, &board).await
}
