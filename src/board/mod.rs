//! Boards, their three fixed lists, and the tasks placed on them.
//!
//! The heart of this module is the move operation: relocating a task
//! reference between list positions while keeping the task's cached status
//! and board reference consistent, repairing them when they have drifted,
//! and handing the resulting board to realtime subscribers. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
