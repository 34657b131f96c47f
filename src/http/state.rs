//! Shared application state and its construction from configuration.

use super::AuthKeys;
use crate::{
    board::{
        adapters::{
            memory::{InMemoryBoardRepository, InMemoryTaskRepository},
            postgres::{PostgresBoardRepository, PostgresTaskRepository, connect_pool, ensure_schema},
            realtime::BoardChannels,
        },
        ports::{BoardRepository, BoardRepositoryError, TaskRepository},
        services::{
            BoardGate, BoardLifecycleService, BoardMutationService, BoardSyncService, TaskService,
        },
    },
    config::ServerConfig,
};
use axum::extract::FromRef;
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// Board lifecycle service over dynamically dispatched stores.
pub type DynLifecycleService =
    BoardLifecycleService<dyn BoardRepository, dyn TaskRepository, DefaultClock>;
/// Task service over dynamically dispatched stores.
pub type DynTaskService = TaskService<dyn BoardRepository, dyn TaskRepository>;
/// Broadcasting move service over dynamically dispatched stores.
pub type DynSyncService =
    BoardSyncService<dyn BoardRepository, dyn TaskRepository, BoardChannels>;

/// Errors raised while wiring the application state.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The connection pool could not be built.
    #[error("failed to connect to the database: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The schema could not be applied.
    #[error("failed to prepare the database schema: {0}")]
    Schema(#[from] BoardRepositoryError),
}

/// State shared by every handler.
///
/// All services share one [`BoardGate`], so board writes are serialised
/// across operations.
#[derive(Clone, FromRef)]
pub struct AppState {
    /// Board creation, lookup, and deletion.
    pub lifecycle: DynLifecycleService,
    /// Task creation, listing, and deletion.
    pub tasks: DynTaskService,
    /// Task moves with realtime broadcast.
    pub sync: DynSyncService,
    /// Per-board realtime channels.
    pub channels: BoardChannels,
    /// Token keys.
    pub auth: AuthKeys,
}

impl AppState {
    /// Wires services around the given stores.
    #[must_use]
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        tasks: Arc<dyn TaskRepository>,
        channels: BoardChannels,
        auth: AuthKeys,
    ) -> Self {
        let gate = BoardGate::new();
        let lifecycle = BoardLifecycleService::new(
            Arc::clone(&boards),
            Arc::clone(&tasks),
            Arc::new(DefaultClock),
        )
        .with_gate(gate.clone());
        let task_service =
            TaskService::new(Arc::clone(&boards), Arc::clone(&tasks)).with_gate(gate.clone());
        let mutation = BoardMutationService::new(boards, tasks).with_gate(gate);
        let sync = BoardSyncService::new(mutation, Arc::new(channels.clone()));

        Self {
            lifecycle,
            tasks: task_service,
            sync,
            channels,
            auth,
        }
    }

    /// Creates state backed by in-memory stores.
    #[must_use]
    pub fn in_memory(channels: BoardChannels, auth: AuthKeys) -> Self {
        Self::new(
            Arc::new(InMemoryBoardRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            channels,
            auth,
        )
    }

    /// Builds state from configuration.
    ///
    /// Uses `PostgreSQL` stores when a database URL is configured, creating
    /// the schema if needed, and in-memory stores otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError`] when the database is unreachable or the
    /// schema cannot be applied.
    pub async fn from_config(config: &ServerConfig) -> Result<Self, BootstrapError> {
        let channels = BoardChannels::new(config.channel_capacity);
        let auth = AuthKeys::from_secret(config.jwt_secret.as_bytes());

        let Some(url) = config.database_url.as_deref() else {
            tracing::info!("no database configured; using in-memory stores");
            return Ok(Self::in_memory(channels, auth));
        };

        let pool = connect_pool(url)?;
        ensure_schema(&pool).await?;
        tracing::info!("using PostgreSQL stores");
        Ok(Self::new(
            Arc::new(PostgresBoardRepository::new(pool.clone())),
            Arc::new(PostgresTaskRepository::new(pool)),
            channels,
            auth,
        ))
    }
}
