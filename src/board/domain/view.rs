//! Reference-expanded board state as served to clients and broadcast to
//! board channels, plus the consumer-side reconciliation of that state.

use super::{Board, BoardId, ListTitle, Task, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Client-facing task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    #[serde(rename = "_id")]
    pub id: TaskId,
    /// Owning user.
    pub user_id: UserId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Title of the list holding the task.
    pub status: ListTitle,
    /// Owning board, if linked.
    pub board_id: Option<BoardId>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            user_id: task.user_id(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
            board_id: task.board_id(),
        }
    }
}

/// A list with its task references replaced by full task records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    /// List title.
    pub title: ListTitle,
    /// Tasks in card order.
    pub tasks: Vec<TaskView>,
}

/// Board with every list's task references expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    /// Board identifier.
    #[serde(rename = "_id")]
    pub id: BoardId,
    /// Owning user.
    pub owner: UserId,
    /// Board title.
    pub title: String,
    /// Users permitted to view the board.
    pub members: Vec<UserId>,
    /// Expanded lists in board order.
    pub lists: Vec<ListView>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl BoardView {
    /// Expands `board` using `tasks` to resolve references.
    ///
    /// References with no matching task are omitted.
    #[must_use]
    pub fn expand(board: &Board, tasks: &[Task]) -> Self {
        let by_id: HashMap<TaskId, &Task> = tasks.iter().map(|task| (task.id(), task)).collect();
        let lists = board
            .lists()
            .iter()
            .map(|list| ListView {
                title: list.title(),
                tasks: list
                    .tasks()
                    .iter()
                    .filter_map(|id| by_id.get(id).map(|task| TaskView::from(*task)))
                    .collect(),
            })
            .collect();

        Self {
            id: board.id(),
            owner: board.owner(),
            title: board.title().to_owned(),
            members: board.members().to_vec(),
            lists,
            created_at: board.created_at(),
        }
    }

    /// Returns the total number of expanded tasks across all lists.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|list| list.tasks.len()).sum()
    }

    /// Returns the expanded list with the given title.
    #[must_use]
    pub fn list(&self, title: ListTitle) -> Option<&ListView> {
        self.lists.iter().find(|list| list.title == title)
    }

    /// Flattens all lists into one task sequence, tagging each task with the
    /// title of the list it came from and this board's identifier.
    #[must_use]
    pub fn flatten_tasks(&self) -> Vec<TaskView> {
        self.lists
            .iter()
            .flat_map(|list| {
                list.tasks.iter().map(move |task| TaskView {
                    status: list.title,
                    board_id: Some(self.id),
                    ..task.clone()
                })
            })
            .collect()
    }
}

/// Local task cache kept in step with board broadcasts.
///
/// Each applied view replaces the cached tasks of its board wholesale; the
/// last view applied wins.
#[derive(Debug, Clone, Default)]
pub struct BoardMirror {
    boards: HashMap<BoardId, Vec<TaskView>>,
}

impl BoardMirror {
    /// Creates an empty mirror.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached tasks for the view's board.
    ///
    /// Returns `false` when the cached state already matched the view.
    pub fn apply(&mut self, view: &BoardView) -> bool {
        let flattened = view.flatten_tasks();
        if self.boards.get(&view.id) == Some(&flattened) {
            return false;
        }
        self.boards.insert(view.id, flattened);
        true
    }

    /// Returns the cached tasks for `board_id`, in list order.
    #[must_use]
    pub fn tasks(&self, board_id: BoardId) -> &[TaskView] {
        self.boards
            .get(&board_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the cached tasks of `board_id` whose status is `status`.
    #[must_use]
    pub fn tasks_with_status(&self, board_id: BoardId, status: ListTitle) -> Vec<&TaskView> {
        self.tasks(board_id)
            .iter()
            .filter(|task| task.status == status)
            .collect()
    }
}
