//! Builders shared by board tests.

use crate::board::{
    adapters::memory::{InMemoryBoardRepository, InMemoryTaskRepository},
    domain::{
        Board, BoardId, BoardList, ListTitle, PersistedBoardData, PersistedTaskData, Task,
        TaskId, UserId,
    },
    ports::{BoardRepository, TaskRepository},
};
use chrono::Utc;
use std::sync::Arc;

/// Builds a board whose lists hold `inbox`, `todo` and `completed` in
/// that order.
pub(super) fn board_with_lists(
    owner: UserId,
    inbox: &[TaskId],
    todo: &[TaskId],
    completed: &[TaskId],
) -> Board {
    Board::from_persisted(PersistedBoardData {
        id: BoardId::new(),
        owner,
        title: "Sprint".to_owned(),
        members: vec![owner],
        lists: vec![
            BoardList::with_tasks(ListTitle::Inbox, inbox.iter().copied()),
            BoardList::with_tasks(ListTitle::Todo, todo.iter().copied()),
            BoardList::with_tasks(ListTitle::Completed, completed.iter().copied()),
        ],
        created_at: Utc::now(),
    })
}

/// Builds a persisted task with an explicit status and board link.
pub(super) fn task_with(
    id: TaskId,
    user_id: UserId,
    status: ListTitle,
    board_id: Option<BoardId>,
) -> Task {
    Task::from_persisted(PersistedTaskData {
        id,
        user_id,
        title: format!("task {id}"),
        description: "something to do".to_owned(),
        status,
        board_id,
    })
}

/// In-memory stores seeded with one board and its tasks.
pub(super) struct Seeded {
    pub boards: Arc<InMemoryBoardRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub board_id: BoardId,
    pub user: UserId,
}

impl Seeded {
    /// Stores `board` and `tasks` in fresh in-memory repositories.
    pub async fn new(board: &Board, tasks: &[Task]) -> Self {
        let boards = Arc::new(InMemoryBoardRepository::new());
        let task_store = Arc::new(InMemoryTaskRepository::new());
        boards.store(board).await.expect("board should store");
        for task in tasks {
            task_store.store(task).await.expect("task should store");
        }
        Self {
            boards,
            tasks: task_store,
            board_id: board.id(),
            user: board.owner(),
        }
    }

    /// Reloads the stored board.
    pub async fn board(&self) -> Board {
        self.boards
            .find_by_id(self.board_id)
            .await
            .expect("lookup should succeed")
            .expect("board should exist")
    }

    /// Reloads a stored task.
    pub async fn task(&self, task_id: TaskId) -> Task {
        self.tasks
            .find_by_id(task_id)
            .await
            .expect("lookup should succeed")
            .expect("task should exist")
    }
}

/// Returns the ids held by the list titled `title`.
pub(super) fn ids_in(board: &Board, title: ListTitle) -> Vec<TaskId> {
    board
        .list(title)
        .map(|list| list.tasks().to_vec())
        .unwrap_or_default()
}
