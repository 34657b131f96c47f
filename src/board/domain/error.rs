//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board title is empty after trimming.
    #[error("board title must not be empty")]
    EmptyBoardTitle,

    /// The board title exceeds the stored column width.
    #[error("board title must be at most {max} characters, got {actual}")]
    BoardTitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,

    /// An identifier string is not a valid UUID.
    #[error("invalid {kind} identifier: {value}")]
    InvalidIdentifier {
        /// Identifier kind (`board`, `task`, `user`).
        kind: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },

    /// The requested destination list does not exist on the board.
    #[error("destination list not found: {0}")]
    DestinationListNotFound(String),

    /// The board has no list matching a task's status.
    #[error("no list exists for status {0}")]
    StatusListNotFound(String),
}

/// Error returned while parsing list titles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown list title: {0}")]
pub struct ParseListTitleError(pub String);
