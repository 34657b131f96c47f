//! Application services for board orchestration.

mod error;
mod expand;
mod gate;
mod lifecycle;
mod mutation;
mod sync;
mod task;

pub use error::{BoardServiceError, BoardServiceErrorKind, BoardServiceResult};
pub use gate::BoardGate;
pub use lifecycle::{BoardLifecycleService, CreateBoardRequest, UpdateBoardRequest};
pub use mutation::{BoardMutationService, MoveTaskRequest};
pub use sync::BoardSyncService;
pub use task::{CreateTaskRequest, TaskService, UpdateTaskRequest};
