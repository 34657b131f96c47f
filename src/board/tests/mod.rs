//! Unit tests for the board context.

mod support;
mod task_service_tests;
