//! `PostgreSQL` adapters for board and task persistence.
//!
//! Boards are stored as documents: members and lists live in JSONB columns
//! and are rewritten together on every update.

mod models;
mod repository;
mod schema;

pub use repository::{
    BoardPgPool, PostgresBoardRepository, PostgresTaskRepository, connect_pool, ensure_schema,
};
