//! In-memory integration tests for the board context.
//!
//! Tests are organized into modules by functionality:
//! - `board_move_tests`: Moves, self-healing, and broadcast delivery
//! - `board_lifecycle_tests`: Board and task creation, listing, and deletion

mod in_memory {
    pub mod helpers;

    mod board_lifecycle_tests;
    mod board_move_tests;
}
