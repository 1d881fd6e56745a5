//! HTTP API for the task service.
//!
//! ## Endpoints
//!
//! - `GET /` - Health check
//! - `GET /tasks` - List all tasks
//! - `POST /tasks` - Create a new task
//! - `PATCH /tasks/{id}` - Update a task's status
//! - `DELETE /tasks/{id}` - Delete a task
//!
//! Every response is JSON with a `success` boolean discriminator; see
//! [`types`] for the envelope shapes and [`error::ApiError`] for the
//! failure mapping.

pub mod error;
mod routes;
mod tasks;
pub mod types;

pub use routes::{app, serve, AppState};
