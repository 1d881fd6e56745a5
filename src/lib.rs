//! # Taskboard
//!
//! Minimal task-tracking service: a JSON REST API over an in-memory
//! task list. No persistence, no authentication.
//!
//! ## Request flow
//! 1. A route handler receives the request
//! 2. Validators classify the payload (rejections become 400 + field issues)
//! 3. The [`store::TaskStore`] applies the operation
//! 4. The outcome is wrapped in the uniform `{success, ...}` envelope
//!
//! ## Modules
//! - `api`: axum routes, handlers, and the response envelope
//! - `store`: in-memory task collection and id assignment
//! - `validate`: pure payload and id validators
//! - `config`: environment-driven configuration

pub mod api;
pub mod config;
pub mod store;
pub mod task;
pub mod validate;

pub use config::Config;
pub use store::TaskStore;
pub use task::{Task, TaskStatus};
