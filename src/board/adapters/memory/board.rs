//! In-memory board document store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardId, UserId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<HashMap<BoardId, Board>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn store(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut boards = self.state.write().map_err(lock_error)?;
        if boards.contains_key(&board.id()) {
            return Err(BoardRepositoryError::DuplicateBoard(board.id()));
        }
        boards.insert(board.id(), board.clone());
        Ok(())
    }

    async fn update(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut boards = self.state.write().map_err(lock_error)?;
        let slot = boards
            .get_mut(&board.id())
            .ok_or(BoardRepositoryError::NotFound(board.id()))?;
        *slot = board.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        let boards = self.state.read().map_err(lock_error)?;
        Ok(boards.get(&id).cloned())
    }

    async fn list_visible_to(&self, user_id: UserId) -> BoardRepositoryResult<Vec<Board>> {
        let boards = self.state.read().map_err(lock_error)?;
        let mut visible: Vec<Board> = boards
            .values()
            .filter(|board| board.is_visible_to(user_id))
            .cloned()
            .collect();
        visible.sort_by_key(|board| (board.created_at(), board.id()));
        Ok(visible)
    }

    async fn delete(&self, id: BoardId) -> BoardRepositoryResult<()> {
        let mut boards = self.state.write().map_err(lock_error)?;
        boards
            .remove(&id)
            .map(|_| ())
            .ok_or(BoardRepositoryError::NotFound(id))
    }
}
