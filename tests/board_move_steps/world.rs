//! Shared world state for board move BDD scenarios.

use std::{collections::HashMap, sync::Arc};

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::{
        memory::{InMemoryBoardRepository, InMemoryTaskRepository},
        realtime::BoardChannels,
    },
    domain::{BoardId, BoardView, TaskId},
    ports::BoardEvent,
    services::{
        BoardGate, BoardLifecycleService, BoardMutationService, BoardServiceError,
        BoardSyncService, TaskService,
    },
};
use tokio::sync::broadcast;

/// Scenario world for board move behaviour tests.
pub struct BoardMoveWorld {
    pub task_store: Arc<InMemoryTaskRepository>,
    pub boards: BoardLifecycleService<InMemoryBoardRepository, InMemoryTaskRepository, DefaultClock>,
    pub tasks: TaskService<InMemoryBoardRepository, InMemoryTaskRepository>,
    pub moves: BoardSyncService<InMemoryBoardRepository, InMemoryTaskRepository, BoardChannels>,
    pub channels: BoardChannels,
    pub board_id: Option<BoardId>,
    pub task_ids: HashMap<String, TaskId>,
    pub subscriber: Option<broadcast::Receiver<BoardEvent>>,
    pub last_move: Option<Result<BoardView, BoardServiceError>>,
}

impl BoardMoveWorld {
    /// Creates a world with empty stores and no board.
    #[must_use]
    pub fn new() -> Self {
        let board_store = Arc::new(InMemoryBoardRepository::new());
        let task_store = Arc::new(InMemoryTaskRepository::new());
        let gate = BoardGate::new();
        let channels = BoardChannels::default();

        Self {
            boards: BoardLifecycleService::new(
                Arc::clone(&board_store),
                Arc::clone(&task_store),
                Arc::new(DefaultClock),
            )
            .with_gate(gate.clone()),
            tasks: TaskService::new(Arc::clone(&board_store), Arc::clone(&task_store))
                .with_gate(gate.clone()),
            moves: BoardSyncService::new(
                BoardMutationService::new(board_store, Arc::clone(&task_store)).with_gate(gate),
                Arc::new(channels.clone()),
            ),
            task_store,
            channels,
            board_id: None,
            task_ids: HashMap::new(),
            subscriber: None,
            last_move: None,
        }
    }

    /// Returns the scenario board.
    ///
    /// # Errors
    ///
    /// Returns an error when no board has been created yet.
    pub fn board_id(&self) -> Result<BoardId, eyre::Report> {
        self.board_id
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Resolves a scenario task name to its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the name was never created.
    pub fn task_id(&self, name: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task {name} in scenario world"))
    }

    /// Resolves a comma-separated list of scenario task names.
    ///
    /// # Errors
    ///
    /// Returns an error when any name is unknown.
    pub fn task_ids_for(&self, names: &str) -> Result<Vec<TaskId>, eyre::Report> {
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| self.task_id(name))
            .collect()
    }
}

impl Default for BoardMoveWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardMoveWorld {
    BoardMoveWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
