//! Move-then-broadcast integration for board realtime channels.

use super::{BoardMutationService, BoardServiceResult, MoveTaskRequest};
use crate::board::{
    domain::BoardView,
    ports::{BoardEvent, BoardEventPublisher, BoardRepository, TaskRepository},
};
use std::sync::Arc;

/// Runs a move and publishes the resulting board to the board's channel.
pub struct BoardSyncService<B, T, P>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    P: BoardEventPublisher + ?Sized,
{
    mutation: BoardMutationService<B, T>,
    publisher: Arc<P>,
}

impl<B, T, P> Clone for BoardSyncService<B, T, P>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    P: BoardEventPublisher + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            mutation: self.mutation.clone(),
            publisher: Arc::clone(&self.publisher),
        }
    }
}

impl<B, T, P> BoardSyncService<B, T, P>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    P: BoardEventPublisher + ?Sized,
{
    /// Creates a sync service around an existing mutation service.
    #[must_use]
    pub const fn new(mutation: BoardMutationService<B, T>, publisher: Arc<P>) -> Self {
        Self {
            mutation,
            publisher,
        }
    }

    /// Moves a task and, on success, publishes a `taskMoved` event carrying
    /// the expanded board.
    ///
    /// The result reflects the move only. A failed publish is logged and
    /// otherwise ignored; identical consecutive payloads are not suppressed.
    ///
    /// # Errors
    ///
    /// Returns the error of [`BoardMutationService::move_task`]; nothing is
    /// published in that case.
    pub async fn move_and_broadcast(
        &self,
        request: MoveTaskRequest,
    ) -> BoardServiceResult<BoardView> {
        let view = self.mutation.move_task(request).await?;
        let board_id = view.id;

        match self.publisher.publish(BoardEvent::task_moved(view.clone())).await {
            Ok(subscribers) => {
                tracing::debug!(%board_id, subscribers, "published taskMoved");
            }
            Err(err) => {
                tracing::warn!(%board_id, error = %err, "failed to publish taskMoved");
            }
        }

        Ok(view)
    }
}
