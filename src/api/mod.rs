//! HTTP API layer.
//!
//! Stateless translation between HTTP and the task store: routing, request
//! validation, and status-code mapping. No task state lives here.

mod error;
pub mod routes;
pub mod tasks;

pub use error::ApiError;
pub use routes::{router, serve, AppState};
