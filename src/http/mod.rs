//! HTTP and WebSocket boundary.
//!
//! The router authenticates every `/api` request with a bearer JWT, decodes
//! identifiers and payloads, and delegates to the board services. Service
//! errors are mapped onto status codes by [`ApiError`].

pub mod auth;
pub mod error;
pub mod handlers;
pub mod realtime;
pub mod router;
pub mod state;

pub use auth::{AuthKeys, AuthenticatedUser, Claims};
pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, BootstrapError};
