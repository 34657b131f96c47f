//! Port contracts for board persistence and realtime publication.
//!
//! Ports define infrastructure-agnostic capabilities injected into board
//! services, so the services themselves hold no global state.

pub mod board_repository;
pub mod events;
pub mod task_repository;

pub use board_repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
pub use events::{BoardEvent, BoardEventPublisher, BroadcastError};
pub use task_repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use board_repository::MockBoardRepository;
#[cfg(test)]
pub use events::MockBoardEventPublisher;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
