//! Service layer for task creation, listing, and deletion.
//!
//! Creation and deletion keep list membership in step with the task record:
//! a new task joins the list matching its status, and a deleted task leaves
//! whichever list held it.

use super::{BoardGate, BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{BoardId, ListTitle, Task, TaskId, UserId},
    ports::{BoardRepository, TaskRepository},
};
use std::sync::Arc;

/// Request payload for creating a task on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    user_id: UserId,
    board_id: BoardId,
    title: String,
    description: String,
    status: ListTitle,
}

impl CreateTaskRequest {
    /// Creates a request for an `inbox` task.
    #[must_use]
    pub fn new(
        user_id: UserId,
        board_id: BoardId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            board_id,
            title: title.into(),
            description: description.into(),
            status: ListTitle::default(),
        }
    }

    /// Sets the initial status (and therefore the initial list).
    #[must_use]
    pub const fn with_status(mut self, status: ListTitle) -> Self {
        self.status = status;
        self
    }
}

/// Request payload for editing a task's text.
///
/// Status and board link are not editable here; they follow the move
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an update that changes nothing yet.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Task orchestration service.
pub struct TaskService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    boards: Arc<B>,
    tasks: Arc<T>,
    gate: BoardGate,
}

impl<B, T> Clone for TaskService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            tasks: Arc::clone(&self.tasks),
            gate: self.gate.clone(),
        }
    }
}

impl<B, T> TaskService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    /// Creates a new task service.
    #[must_use]
    pub fn new(boards: Arc<B>, tasks: Arc<T>) -> Self {
        Self {
            boards,
            tasks,
            gate: BoardGate::new(),
        }
    }

    /// Shares `gate` with other services writing the same boards.
    #[must_use]
    pub fn with_gate(mut self, gate: BoardGate) -> Self {
        self.gate = gate;
        self
    }

    /// Creates a task and appends it to the board list matching its status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the title or description is
    /// blank or the board lacks the status list,
    /// [`BoardServiceError::BoardNotFound`] when the board does not exist, or
    /// a repository error when persistence fails.
    #[tracing::instrument(
        name = "task.create",
        skip(self, request),
        fields(board_id = %request.board_id, user_id = %request.user_id)
    )]
    pub async fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let CreateTaskRequest {
            user_id,
            board_id,
            title,
            description,
            status,
        } = request;

        let task = Task::new(user_id, title, description, Some(board_id))?.with_status(status);

        let _guard = self.gate.acquire(board_id).await;
        let mut board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or(BoardServiceError::BoardNotFound(board_id))?;
        board.place_new_task(task.id(), task.status())?;

        self.tasks.store(&task).await?;
        self.boards.update(&board).await?;
        tracing::info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Returns every task owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lookup fails.
    pub async fn list_tasks_for_user(&self, user_id: UserId) -> BoardServiceResult<Vec<Task>> {
        Ok(self.tasks.list_by_user(user_id).await?)
    }

    /// Edits a task's title or description and returns the stored task.
    ///
    /// Holds the gate of the task's board so the write cannot overwrite a
    /// concurrent move's status change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::TaskNotFound`] when the task does not
    /// exist, [`BoardServiceError::Domain`] when a new text is blank (nothing
    /// is stored), or a repository error when persistence fails.
    #[tracing::instrument(name = "task.update", skip(self, request), fields(task_id = %request.task_id))]
    pub async fn update_task(&self, request: UpdateTaskRequest) -> BoardServiceResult<Task> {
        let UpdateTaskRequest {
            task_id,
            title,
            description,
        } = request;

        let board_id = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(BoardServiceError::TaskNotFound(task_id))?
            .board_id();
        match board_id {
            Some(id) => {
                let _guard = self.gate.acquire(id).await;
                self.apply_update(task_id, title, description).await
            }
            None => self.apply_update(task_id, title, description).await,
        }
    }

    async fn apply_update(
        &self,
        task_id: TaskId,
        title: Option<String>,
        description: Option<String>,
    ) -> BoardServiceResult<Task> {
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(BoardServiceError::TaskNotFound(task_id))?;
        if let Some(new_title) = title {
            task.rename(new_title)?;
        }
        if let Some(new_description) = description {
            task.describe(new_description)?;
        }

        self.tasks.update(&task).await?;
        tracing::info!("task updated");
        Ok(task)
    }

    /// Deletes a task and removes its reference from whichever list holds it.
    ///
    /// A missing or stale board reference does not prevent deletion of the
    /// task record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::TaskNotFound`] when the task does not
    /// exist, or a repository error when persistence fails.
    #[tracing::instrument(name = "task.delete", skip(self), fields(task_id = %task_id))]
    pub async fn delete_task(&self, task_id: TaskId) -> BoardServiceResult<()> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(BoardServiceError::TaskNotFound(task_id))?;

        if let Some(board_id) = task.board_id() {
            let _guard = self.gate.acquire(board_id).await;
            match self.boards.find_by_id(board_id).await? {
                Some(mut board) => match board.detach_task(task_id, task.status()) {
                    Some(list) => {
                        self.boards.update(&board).await?;
                        tracing::debug!(%board_id, %list, "task reference removed");
                    }
                    None => tracing::debug!(%board_id, "task was in no list"),
                },
                None => tracing::debug!(%board_id, "task references a missing board"),
            }
        }

        self.tasks.delete(task_id).await?;
        tracing::info!("task deleted");
        Ok(())
    }
}
