//! Service layer for board creation, lookup, and deletion.

use super::{
    BoardGate, BoardServiceError, BoardServiceResult,
    expand::{expand_board, load_expanded},
};
use crate::board::{
    domain::{Board, BoardId, BoardView, UserId},
    ports::{BoardRepository, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardRequest {
    owner: UserId,
    title: String,
    members: Vec<UserId>,
}

impl CreateBoardRequest {
    /// Creates a request for a board owned by `owner`.
    #[must_use]
    pub fn new(owner: UserId, title: impl Into<String>) -> Self {
        Self {
            owner,
            title: title.into(),
            members: Vec::new(),
        }
    }

    /// Shares the board with additional members.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = UserId>) -> Self {
        self.members = members.into_iter().collect();
        self
    }
}

/// Request payload for editing a board's title or members.
///
/// Fields left unset are not changed. Lists are never edited here; task
/// placement changes only through a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBoardRequest {
    board_id: BoardId,
    title: Option<String>,
    members: Option<Vec<UserId>>,
}

impl UpdateBoardRequest {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub const fn new(board_id: BoardId) -> Self {
        Self {
            board_id,
            title: None,
            members: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the member set; the owner is always kept.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = UserId>) -> Self {
        self.members = Some(members.into_iter().collect());
        self
    }
}

/// Board lifecycle orchestration service.
pub struct BoardLifecycleService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    boards: Arc<B>,
    tasks: Arc<T>,
    clock: Arc<C>,
    gate: BoardGate,
}

impl<B, T, C> Clone for BoardLifecycleService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
            gate: self.gate.clone(),
        }
    }
}

impl<B, T, C> BoardLifecycleService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new board lifecycle service.
    #[must_use]
    pub fn new(boards: Arc<B>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            boards,
            tasks,
            clock,
            gate: BoardGate::new(),
        }
    }

    /// Shares `gate` with other services writing the same boards.
    #[must_use]
    pub fn with_gate(mut self, gate: BoardGate) -> Self {
        self.gate = gate;
        self
    }

    /// Creates a board with empty `inbox`, `todo` and `completed` lists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`](super::BoardServiceError::Domain)
    /// when the title is blank, or a repository error when persistence fails.
    #[tracing::instrument(name = "board.create", skip(self, request), fields(owner = %request.owner))]
    pub async fn create_board(&self, request: CreateBoardRequest) -> BoardServiceResult<BoardView> {
        let CreateBoardRequest {
            owner,
            title,
            members,
        } = request;

        let board = Board::new(owner, title, members, &*self.clock)?;
        self.boards.store(&board).await?;
        tracing::info!(board_id = %board.id(), "board created");
        Ok(BoardView::expand(&board, &[]))
    }

    /// Returns the expanded board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`](super::BoardServiceError::BoardNotFound)
    /// when the board does not exist, or a repository error when lookup
    /// fails.
    pub async fn get_board(&self, board_id: BoardId) -> BoardServiceResult<BoardView> {
        load_expanded(&*self.boards, &*self.tasks, board_id).await
    }

    /// Returns every board `user_id` owns or is a member of, expanded and
    /// oldest first.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lookup fails.
    pub async fn list_boards_for_user(&self, user_id: UserId) -> BoardServiceResult<Vec<BoardView>> {
        let boards = self.boards.list_visible_to(user_id).await?;
        let mut views = Vec::with_capacity(boards.len());
        for board in &boards {
            views.push(expand_board(&*self.tasks, board).await?);
        }
        Ok(views)
    }

    /// Applies a title or member change and returns the expanded board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the board does not
    /// exist, [`BoardServiceError::Domain`] when the new title is invalid (the
    /// board is left unchanged), or a repository error when persistence fails.
    #[tracing::instrument(name = "board.update", skip(self, request), fields(board_id = %request.board_id))]
    pub async fn update_board(&self, request: UpdateBoardRequest) -> BoardServiceResult<BoardView> {
        let UpdateBoardRequest {
            board_id,
            title,
            members,
        } = request;

        let _guard = self.gate.acquire(board_id).await;
        let mut board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or(BoardServiceError::BoardNotFound(board_id))?;
        if let Some(new_title) = title {
            board.rename(new_title)?;
        }
        if let Some(new_members) = members {
            board.set_members(new_members);
        }

        self.boards.update(&board).await?;
        tracing::info!("board updated");
        expand_board(&*self.tasks, &board).await
    }

    /// Deletes a board document. Tasks referencing it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`](super::BoardServiceError::BoardNotFound)
    /// when the board does not exist, or a repository error when deletion
    /// fails.
    #[tracing::instrument(name = "board.delete", skip(self), fields(board_id = %board_id))]
    pub async fn delete_board(&self, board_id: BoardId) -> BoardServiceResult<()> {
        {
            let _guard = self.gate.acquire(board_id).await;
            self.boards.delete(board_id).await?;
        }
        self.gate.forget(board_id);
        tracing::info!("board deleted");
        Ok(())
    }
}
