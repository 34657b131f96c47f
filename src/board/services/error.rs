//! Service-level errors shared by board services.

use crate::board::{
    domain::{BoardDomainError, BoardId, TaskId},
    ports::{BoardRepositoryError, TaskRepositoryError},
};
use thiserror::Error;

/// Service-level errors for board and task operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The board identifier does not resolve.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),
    /// The task identifier does not resolve.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Board store operation failed.
    #[error(transparent)]
    BoardRepository(BoardRepositoryError),
    /// Task store operation failed.
    #[error(transparent)]
    TaskRepository(TaskRepositoryError),
}

/// Coarse classification of a [`BoardServiceError`] for callers that map
/// errors onto transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardServiceErrorKind {
    /// A board or task identifier did not resolve.
    NotFound,
    /// The request was rejected by validation.
    Validation,
    /// The underlying store failed.
    Storage,
}

impl BoardServiceError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> BoardServiceErrorKind {
        match self {
            Self::BoardNotFound(_) | Self::TaskNotFound(_) => BoardServiceErrorKind::NotFound,
            Self::Domain(_) => BoardServiceErrorKind::Validation,
            Self::BoardRepository(_) | Self::TaskRepository(_) => BoardServiceErrorKind::Storage,
        }
    }
}

impl From<BoardRepositoryError> for BoardServiceError {
    fn from(err: BoardRepositoryError) -> Self {
        match err {
            BoardRepositoryError::NotFound(id) => Self::BoardNotFound(id),
            other => Self::BoardRepository(other),
        }
    }
}

impl From<TaskRepositoryError> for BoardServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::TaskRepository(other),
        }
    }
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;
