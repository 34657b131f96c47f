//! Publish port for board realtime channels.

use crate::board::domain::{BoardId, BoardView};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Event pushed to every subscriber of a board channel.
///
/// Payloads carry full board state, not diffs; subscribers keep the last one
/// they receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum BoardEvent {
    /// A task was moved; carries the resulting expanded board.
    #[serde(rename = "taskMoved", rename_all = "camelCase")]
    TaskMoved {
        /// Channel the event belongs to.
        board_id: BoardId,
        /// Authoritative board state after the move.
        board: BoardView,
    },
}

impl BoardEvent {
    /// Builds a task-moved event for `board`.
    #[must_use]
    pub fn task_moved(board: BoardView) -> Self {
        Self::TaskMoved {
            board_id: board.id,
            board,
        }
    }

    /// Returns the channel the event is published on.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        match self {
            Self::TaskMoved { board_id, .. } => *board_id,
        }
    }

    /// Returns the wire name of the event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TaskMoved { .. } => "taskMoved",
        }
    }
}

/// Board channel publish contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardEventPublisher: Send + Sync {
    /// Publishes `event` on the channel of its board.
    ///
    /// Returns the number of subscribers the event was handed to; zero
    /// subscribers is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BroadcastError`] when the channel cannot accept the event.
    async fn publish(&self, event: BoardEvent) -> Result<usize, BroadcastError>;
}

/// Errors returned by board event publishers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BroadcastError {
    /// The channel registry could not be accessed.
    #[error("board channel registry unavailable: {0}")]
    RegistryUnavailable(String),
}
