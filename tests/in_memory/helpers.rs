//! Shared test helpers for in-memory board integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskboard::board::{
    adapters::{
        memory::{InMemoryBoardRepository, InMemoryTaskRepository},
        realtime::BoardChannels,
    },
    domain::{BoardView, ListTitle, Task, TaskId, UserId},
    services::{
        BoardGate, BoardLifecycleService, BoardMutationService, BoardSyncService,
        CreateBoardRequest, CreateTaskRequest, TaskService,
    },
};

/// Board lifecycle service over in-memory stores.
pub type Lifecycle =
    BoardLifecycleService<InMemoryBoardRepository, InMemoryTaskRepository, DefaultClock>;
/// Task service over in-memory stores.
pub type Tasks = TaskService<InMemoryBoardRepository, InMemoryTaskRepository>;
/// Broadcasting move service over in-memory stores.
pub type Moves = BoardSyncService<InMemoryBoardRepository, InMemoryTaskRepository, BoardChannels>;

/// Services wired around one set of in-memory stores.
pub struct Harness {
    pub boards: Lifecycle,
    pub tasks: Tasks,
    pub moves: Moves,
    pub channels: BoardChannels,
}

/// Provides services sharing stores, a board gate, and a channel registry.
#[fixture]
pub fn harness() -> Harness {
    let board_store = Arc::new(InMemoryBoardRepository::new());
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let gate = BoardGate::new();
    let channels = BoardChannels::default();

    Harness {
        boards: BoardLifecycleService::new(
            Arc::clone(&board_store),
            Arc::clone(&task_store),
            Arc::new(DefaultClock),
        )
        .with_gate(gate.clone()),
        tasks: TaskService::new(Arc::clone(&board_store), Arc::clone(&task_store))
            .with_gate(gate.clone()),
        moves: BoardSyncService::new(
            BoardMutationService::new(board_store, task_store).with_gate(gate),
            Arc::new(channels.clone()),
        ),
        channels,
    }
}

impl Harness {
    /// Creates a board owned by `owner` with one `inbox` task per title.
    ///
    /// # Errors
    ///
    /// Returns an error if board or task creation fails.
    pub async fn board_with_inbox(
        &self,
        owner: UserId,
        titles: &[&str],
    ) -> Result<(BoardView, Vec<Task>), eyre::Report> {
        let board = self
            .boards
            .create_board(CreateBoardRequest::new(owner, "Integration board"))
            .await?;
        let mut tasks = Vec::with_capacity(titles.len());
        for title in titles {
            let request = CreateTaskRequest::new(owner, board.id, *title, format!("{title} details"));
            tasks.push(self.tasks.create_task(request).await?);
        }
        let refreshed = self.boards.get_board(board.id).await?;
        Ok((refreshed, tasks))
    }
}

/// Returns the task ids of the list titled `title` in `view`.
#[must_use]
pub fn ids_in(view: &BoardView, title: ListTitle) -> Vec<TaskId> {
    view.list(title)
        .map(|list| list.tasks.iter().map(|task| task.id).collect())
        .unwrap_or_default()
}

/// Returns the id of the task at `index` in `tasks`.
///
/// # Errors
///
/// Returns an error when `index` is out of range.
pub fn task_id_at(tasks: &[Task], index: usize) -> Result<TaskId, eyre::Report> {
    tasks
        .get(index)
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("no task at index {index}"))
}
