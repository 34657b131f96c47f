//! Fixed list titles and the embedded list value.

use super::{ParseListTitleError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title of one of the three fixed lists every board carries.
///
/// A task's status mirrors the title of the list that holds it, so this type
/// doubles as the task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListTitle {
    /// Newly captured work.
    #[default]
    Inbox,
    /// Work scheduled to be done.
    Todo,
    /// Finished work.
    Completed,
}

impl ListTitle {
    /// All list titles in board order.
    pub const ALL: [Self; 3] = [Self::Inbox, Self::Todo, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Todo => "todo",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for ListTitle {
    type Error = ParseListTitleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "inbox" => Ok(Self::Inbox),
            "todo" => Ok(Self::Todo),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseListTitleError(value.to_owned())),
        }
    }
}

impl fmt::Display for ListTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered sequence of task references under a fixed title.
///
/// Order is the visual card order within a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    title: ListTitle,
    tasks: Vec<TaskId>,
}

impl BoardList {
    /// Creates an empty list.
    #[must_use]
    pub const fn empty(title: ListTitle) -> Self {
        Self {
            title,
            tasks: Vec::new(),
        }
    }

    /// Creates a list holding the given task references in order.
    #[must_use]
    pub fn with_tasks(title: ListTitle, tasks: impl IntoIterator<Item = TaskId>) -> Self {
        Self {
            title,
            tasks: tasks.into_iter().collect(),
        }
    }

    /// Returns the list title.
    #[must_use]
    pub const fn title(&self) -> ListTitle {
        self.title
    }

    /// Returns the ordered task references.
    #[must_use]
    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    /// Returns the position of `task_id` in this list, if present.
    #[must_use]
    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|id| *id == task_id)
    }

    /// Returns `true` when this list references `task_id`.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.tasks.contains(&task_id)
    }

    /// Removes and returns the reference at `index`, shifting later entries
    /// left.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<TaskId> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    /// Inserts a reference at `index`, appending when `index` is past the end.
    pub(crate) fn insert_at(&mut self, index: usize, task_id: TaskId) {
        let clamped = index.min(self.tasks.len());
        self.tasks.insert(clamped, task_id);
    }

    /// Appends a reference to the end of the list.
    pub(crate) fn push(&mut self, task_id: TaskId) {
        self.tasks.push(task_id);
    }
}
