//! # Task Board
//!
//! A minimal task-tracking web service: an in-memory task list exposed over
//! HTTP, plus a static browser page that consumes the API.
//!
//! ## Architecture
//!
//! ```text
//! client (browser / curl)
//!         │
//!         ▼
//!   HTTP API layer (axum)      src/api/
//!         │
//!         ▼
//!   Task store (RwLock'd)      src/store.rs
//! ```
//!
//! The store is the only stateful component. It is constructed once in
//! [`api::serve`] (or directly by tests) and handed to the handlers through
//! shared state; there are no globals.
//!
//! ## Modules
//! - `store`: task data model and the in-memory store
//! - `api`: routers, handlers, and error mapping
//! - `config`: environment-driven server settings

pub mod api;
pub mod config;
pub mod store;

pub use config::Config;
pub use store::{Task, TaskStore};
