//! Task aggregate.

use super::{BoardDomainError, BoardId, ListTitle, TaskId, UserId};
use serde::{Deserialize, Serialize};

fn non_blank(raw: &str, err: BoardDomainError) -> Result<String, BoardDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_owned())
}

/// A titled unit of work owned by a user.
///
/// `status` is a denormalized cache of the list holding the task and
/// `board_id` a weak back-reference; both may be stale and are repaired by
/// the move operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    title: String,
    description: String,
    status: ListTitle,
    board_id: Option<BoardId>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning user.
    pub user_id: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: ListTitle,
    /// Persisted board reference, if any.
    pub board_id: Option<BoardId>,
}

impl Task {
    /// Creates a new task in the `inbox` status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] or
    /// [`BoardDomainError::EmptyTaskDescription`] when either text is blank.
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        description: impl Into<String>,
        board_id: Option<BoardId>,
    ) -> Result<Self, BoardDomainError> {
        let raw_title: String = title.into();
        let raw_description: String = description.into();
        let trimmed_title = non_blank(&raw_title, BoardDomainError::EmptyTaskTitle)?;
        let trimmed_description =
            non_blank(&raw_description, BoardDomainError::EmptyTaskDescription)?;

        Ok(Self {
            id: TaskId::new(),
            user_id,
            title: trimmed_title,
            description: trimmed_description,
            status: ListTitle::default(),
            board_id,
        })
    }

    /// Sets the initial status of a task that has not yet been placed.
    #[must_use]
    pub const fn with_status(mut self, status: ListTitle) -> Self {
        self.status = status;
        self
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            title: data.title,
            description: data.description,
            status: data.status,
            board_id: data.board_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the cached list status.
    #[must_use]
    pub const fn status(&self) -> ListTitle {
        self.status
    }

    /// Returns the board reference, if any.
    #[must_use]
    pub const fn board_id(&self) -> Option<BoardId> {
        self.board_id
    }

    /// Returns `true` when the board reference is absent or points elsewhere.
    #[must_use]
    pub fn needs_board_link(&self, board_id: BoardId) -> bool {
        self.board_id != Some(board_id)
    }

    /// Points the task at `board_id`.
    pub const fn link_to_board(&mut self, board_id: BoardId) {
        self.board_id = Some(board_id);
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn rename(&mut self, title: impl Into<String>) -> Result<(), BoardDomainError> {
        let raw_title: String = title.into();
        self.title = non_blank(&raw_title, BoardDomainError::EmptyTaskTitle)?;
        Ok(())
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskDescription`] when the
    /// description is blank.
    pub fn describe(&mut self, description: impl Into<String>) -> Result<(), BoardDomainError> {
        let raw_description: String = description.into();
        self.description = non_blank(&raw_description, BoardDomainError::EmptyTaskDescription)?;
        Ok(())
    }

    /// Records the list that now holds the task.
    pub const fn set_status(&mut self, status: ListTitle) {
        self.status = status;
    }
}
