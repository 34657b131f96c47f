//! In-memory adapters for board and task stores.

mod board;
mod task;

pub use board::InMemoryBoardRepository;
pub use task::InMemoryTaskRepository;
