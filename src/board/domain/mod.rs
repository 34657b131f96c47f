//! Domain model for boards, their fixed lists, and tasks.
//!
//! The board domain owns the move algorithm and its self-healing rules as
//! pure functions over in-memory values; persistence and broadcast stay
//! outside the domain boundary.

mod board;
mod error;
mod ids;
mod list;
mod placement;
mod task;
mod view;

pub use board::{Board, MAX_BOARD_TITLE_CHARS, PersistedBoardData};
pub use error::{BoardDomainError, ParseListTitleError};
pub use ids::{BoardId, TaskId, UserId};
pub use list::{BoardList, ListTitle};
pub use placement::{MoveOutcome, TaskPlacement, locate_task};
pub use task::{PersistedTaskData, Task};
pub use view::{BoardMirror, BoardView, ListView, TaskView};
