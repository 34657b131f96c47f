//! Board mutation service: moving a task between list positions.

use super::{BoardGate, BoardServiceError, BoardServiceResult, expand::load_expanded};
use crate::board::{
    domain::{BoardId, BoardView, MoveOutcome, TaskId},
    ports::{BoardRepository, TaskRepository},
};
use std::sync::Arc;

/// Request payload for moving a task within a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    board_id: BoardId,
    task_id: TaskId,
    from_list: String,
    to_list: String,
    insert_at: usize,
}

impl MoveTaskRequest {
    /// Creates a move request.
    ///
    /// `from_list` is only a hint for locating the task. `to_list` must name
    /// one of the board's lists. `insert_at` past the end of the destination
    /// appends.
    #[must_use]
    pub fn new(
        board_id: BoardId,
        task_id: TaskId,
        from_list: impl Into<String>,
        to_list: impl Into<String>,
        insert_at: usize,
    ) -> Self {
        Self {
            board_id,
            task_id,
            from_list: from_list.into(),
            to_list: to_list.into(),
            insert_at,
        }
    }

    /// Returns the target board.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the task being moved.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the source list hint.
    #[must_use]
    pub fn from_list(&self) -> &str {
        &self.from_list
    }

    /// Returns the destination list name.
    #[must_use]
    pub fn to_list(&self) -> &str {
        &self.to_list
    }

    /// Returns the requested insertion index.
    #[must_use]
    pub const fn insert_at(&self) -> usize {
        self.insert_at
    }
}

/// Moves tasks between list positions and keeps task records consistent
/// with the board.
///
/// Does not publish anything; see
/// [`BoardSyncService`](super::BoardSyncService) for the broadcasting
/// wrapper.
pub struct BoardMutationService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    boards: Arc<B>,
    tasks: Arc<T>,
    gate: BoardGate,
}

impl<B, T> Clone for BoardMutationService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            tasks: Arc::clone(&self.tasks),
            gate: self.gate.clone(),
        }
    }
}

impl<B, T> BoardMutationService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    /// Creates a mutation service with its own board gate.
    #[must_use]
    pub fn new(boards: Arc<B>, tasks: Arc<T>) -> Self {
        Self {
            boards,
            tasks,
            gate: BoardGate::new(),
        }
    }

    /// Shares `gate` with other services writing the same boards.
    #[must_use]
    pub fn with_gate(mut self, gate: BoardGate) -> Self {
        self.gate = gate;
        self
    }

    /// Moves a task to `insert_at` in the destination list and returns the
    /// expanded board.
    ///
    /// The task's board reference is repaired first when absent or stale;
    /// that write stands even if the move is then rejected. The source list
    /// is resolved from the hint, falling back to a scan of every list. A
    /// task held by no list is inserted into the destination without a
    /// removal. The task's status is set to the destination title and both
    /// documents are saved. Writes are not rolled back if a later write
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] or
    /// [`BoardServiceError::TaskNotFound`] when an identifier does not
    /// resolve, [`BoardServiceError::Domain`] when the destination list does
    /// not exist (no list is changed), and repository variants when a store
    /// fails.
    #[tracing::instrument(
        name = "board.move_task",
        skip(self, request),
        fields(
            board_id = %request.board_id(),
            task_id = %request.task_id(),
            to_list = request.to_list(),
        )
    )]
    pub async fn move_task(&self, request: MoveTaskRequest) -> BoardServiceResult<BoardView> {
        let MoveTaskRequest {
            board_id,
            task_id,
            from_list,
            to_list,
            insert_at,
        } = request;

        let _guard = self.gate.acquire(board_id).await;

        let mut board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or(BoardServiceError::BoardNotFound(board_id))?;
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(BoardServiceError::TaskNotFound(task_id))?;

        if task.needs_board_link(board_id) {
            tracing::warn!(previous = ?task.board_id(), "repairing task board reference");
            task.link_to_board(board_id);
            self.tasks.update(&task).await?;
        }

        let outcome = board.relocate_task(task_id, &from_list, &to_list, insert_at)?;
        match outcome {
            MoveOutcome::Relocated { from, to, index } => {
                tracing::debug!(%from, %to, index, "task relocated");
            }
            MoveOutcome::Recovered { to, index } => {
                tracing::warn!(%to, index, "task was in no list; inserted into destination");
            }
        }

        task.set_status(outcome.destination());
        self.tasks.update(&task).await?;
        self.boards.update(&board).await?;

        load_expanded(&*self.boards, &*self.tasks, board_id).await
    }
}
