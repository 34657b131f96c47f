//! Diesel row models for board and task persistence.

use super::schema::{boards, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for board documents.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardRow {
    /// Board identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Owning user.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub owner_id: uuid::Uuid,
    /// Board title.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub title: String,
    /// Member identifiers JSON payload.
    #[diesel(sql_type = diesel::sql_types::Jsonb)]
    pub members: Value,
    /// Lists JSON payload.
    #[diesel(sql_type = diesel::sql_types::Jsonb)]
    pub lists: Value,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
}

/// Insert model for board documents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boards)]
pub struct NewBoardRow {
    /// Board identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub owner_id: uuid::Uuid,
    /// Board title.
    pub title: String,
    /// Member identifiers JSON payload.
    pub members: Value,
    /// Lists JSON payload.
    pub lists: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub user_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status string.
    pub status: String,
    /// Board reference, if any.
    pub board_id: Option<uuid::Uuid>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub user_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status string.
    pub status: String,
    /// Board reference, if any.
    pub board_id: Option<uuid::Uuid>,
}
