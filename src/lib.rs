//! Taskboard: collaborative kanban boards with realtime list updates.
//!
//! Boards hold three fixed lists (`inbox`, `todo`, `completed`) of task
//! references. Moving a task rearranges those references, self-heals stale
//! task state, and pushes the resulting board to every connection that has
//! joined the board's channel.
//!
//! # Architecture
//!
//! The board context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and publication
//! - **Adapters**: In-memory, `PostgreSQL`, and broadcast-channel
//!   implementations of the ports
//! - **Services**: Orchestration of domain operations over the ports
//!
//! # Modules
//!
//! - [`board`]: Boards, tasks, and the move algorithm
//! - [`http`]: REST and WebSocket boundary
//! - [`config`]: Server configuration
//! - [`telemetry`]: Log subscriber setup

pub mod board;
pub mod config;
pub mod http;
pub mod telemetry;
