//! `PostgreSQL` repository implementations for boards and tasks.

use super::{
    models::{BoardRow, NewBoardRow, NewTaskRow, TaskRow},
    schema::{boards, tasks},
};
use crate::board::{
    domain::{
        Board, BoardId, BoardList, ListTitle, PersistedBoardData, PersistedTaskData, Task, TaskId,
        UserId,
    },
    ports::{
        BoardRepository, BoardRepositoryError, BoardRepositoryResult, TaskRepository,
        TaskRepositoryError, TaskRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_boards_and_tasks/up.sql");

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns the pool construction error when no connection can be opened.
pub fn connect_pool(database_url: &str) -> Result<BoardPgPool, diesel::r2d2::PoolError> {
    Pool::builder().build(ConnectionManager::<PgConnection>::new(database_url))
}

/// Creates the board and task tables when they do not exist yet.
///
/// # Errors
///
/// Returns [`BoardRepositoryError::Persistence`] when the schema cannot be
/// applied.
pub async fn ensure_schema(pool: &BoardPgPool) -> BoardRepositoryResult<()> {
    let pool_handle = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool_handle
            .get()
            .map_err(BoardRepositoryError::persistence)?;
        connection
            .batch_execute(SCHEMA_SQL)
            .map_err(BoardRepositoryError::persistence)
    })
    .await
    .map_err(BoardRepositoryError::persistence)?
}

/// `PostgreSQL`-backed board document repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn store(&self, board: &Board) -> BoardRepositoryResult<()> {
        let board_id = board.id();
        let new_row = to_new_board_row(board)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(boards::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateBoard(board_id)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, board: &Board) -> BoardRepositoryResult<()> {
        let board_id = board.id().into_inner();
        let title_val = board.title().to_owned();
        let members_val =
            serde_json::to_value(board.members()).map_err(BoardRepositoryError::persistence)?;
        let lists_val =
            serde_json::to_value(board.lists()).map_err(BoardRepositoryError::persistence)?;

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(boards::table.filter(boards::id.eq(board_id)))
                .set((
                    boards::title.eq(&title_val),
                    boards::members.eq(&members_val),
                    boards::lists.eq(&lists_val),
                ))
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(BoardRepositoryError::NotFound(BoardId::from_uuid(board_id)));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        self.run_blocking(move |connection| {
            let row = boards::table
                .filter(boards::id.eq(id.into_inner()))
                .select(BoardRow::as_select())
                .first::<BoardRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn list_visible_to(&self, user_id: UserId) -> BoardRepositoryResult<Vec<Board>> {
        let user_uuid = user_id.into_inner();
        self.run_blocking(move |connection| {
            let rows = diesel::sql_query(
                "SELECT id, owner_id, title, members, lists, created_at FROM boards \
                 WHERE owner_id = $1 OR members @> jsonb_build_array($2::text) \
                 ORDER BY created_at, id",
            )
            .bind::<diesel::sql_types::Uuid, _>(user_uuid)
            .bind::<diesel::sql_types::Text, _>(user_uuid.to_string())
            .load::<BoardRow>(connection)
            .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_board).collect()
        })
        .await
    }

    async fn delete(&self, id: BoardId) -> BoardRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(boards::table.filter(boards::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(BoardRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_board_row(board: &Board) -> BoardRepositoryResult<NewBoardRow> {
    let members =
        serde_json::to_value(board.members()).map_err(BoardRepositoryError::persistence)?;
    let lists = serde_json::to_value(board.lists()).map_err(BoardRepositoryError::persistence)?;

    Ok(NewBoardRow {
        id: board.id().into_inner(),
        owner_id: board.owner().into_inner(),
        title: board.title().to_owned(),
        members,
        lists,
        created_at: board.created_at(),
    })
}

fn row_to_board(row: BoardRow) -> BoardRepositoryResult<Board> {
    let BoardRow {
        id,
        owner_id,
        title,
        members,
        lists,
        created_at,
    } = row;

    let parsed_members: Vec<UserId> =
        serde_json::from_value(members).map_err(BoardRepositoryError::persistence)?;
    let parsed_lists: Vec<BoardList> =
        serde_json::from_value(lists).map_err(BoardRepositoryError::persistence)?;

    Ok(Board::from_persisted(PersistedBoardData {
        id: BoardId::from_uuid(id),
        owner: UserId::from_uuid(owner_id),
        title,
        members: parsed_members,
        lists: parsed_lists,
        created_at,
    }))
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_task_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().into_inner();
        let title_val = task.title().to_owned();
        let description_val = task.description().to_owned();
        let status_val = task.status().as_str().to_owned();
        let board_val = task.board_id().map(BoardId::into_inner);

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(tasks::table.filter(tasks::id.eq(task_id)))
                .set((
                    tasks::title.eq(&title_val),
                    tasks::description.eq(&description_val),
                    tasks::status.eq(&status_val),
                    tasks::board_id.eq(board_val),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(TaskId::from_uuid(task_id)));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<Vec<Task>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::id.eq_any(uuids))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::user_id.eq(user_id.into_inner()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_task_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        user_id: task.user_id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        board_id: task.board_id().map(BoardId::into_inner),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        user_id,
        title,
        description,
        status,
        board_id,
    } = row;

    let parsed_status =
        ListTitle::try_from(status.as_str()).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        title,
        description,
        status: parsed_status,
        board_id: board_id.map(BoardId::from_uuid),
    }))
}
