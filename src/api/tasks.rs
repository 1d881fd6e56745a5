//! Task CRUD endpoints.
//!
//! Every handler follows the same shape: validate the input, call the
//! store, wrap the outcome in the response envelope. Validators and the
//! store report failure through return values, so the only errors here
//! are the ones deliberately mapped in [`super::error`].

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::config::Config;
use crate::task::Task;
use crate::validate;

use super::error::ApiError;
use super::routes::AppState;
use super::types::{DataResponse, MessageResponse};

/// GET /tasks - List all tasks.
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<DataResponse<Vec<Task>>> {
    let tasks = state.store.list_all().await;
    Json(DataResponse::new(tasks))
}

/// POST /tasks - Create a new task.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Task>>), ApiError> {
    let body = parse_body(body, "Invalid input data", &state.config)?;
    let payload = validate::validate_create(&body).map_err(ApiError::invalid_input)?;

    let task = state.store.create(payload.title, payload.description).await;
    tracing::info!(id = %task.id, "Created task");

    Ok((StatusCode::CREATED, Json(DataResponse::new(task))))
}

/// PATCH /tasks/:id - Update a task's status.
pub async fn update_task_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DataResponse<Task>>, ApiError> {
    if !validate::validate_task_id(&id) {
        return Err(ApiError::invalid_task_id());
    }

    let body = parse_body(body, "Invalid status data", &state.config)?;
    let status = validate::validate_status(&body).map_err(ApiError::invalid_status)?;

    let task = state
        .store
        .update_status(&id, status)
        .await
        .ok_or_else(ApiError::task_not_found)?;
    tracing::info!(id = %task.id, status = %task.status, "Updated task status");

    Ok(Json(DataResponse::new(task)))
}

/// DELETE /tasks/:id - Delete a task.
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !validate::validate_task_id(&id) {
        return Err(ApiError::invalid_task_id());
    }

    if !state.store.delete(&id).await {
        return Err(ApiError::task_not_found());
    }
    tracing::info!(id = %id, "Deleted task");

    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

/// Unwrap an extracted JSON body.
///
/// A request without a JSON content type is treated as an empty body so
/// the validators can report the missing fields. A body that fails to
/// parse as JSON maps to the endpoint's 400 message without details.
fn parse_body(
    body: Result<Json<Value>, JsonRejection>,
    invalid_msg: &str,
    config: &Config,
) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Default::default())),
        Err(rejection @ (JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_))) => {
            tracing::debug!("Rejected malformed request body: {}", rejection);
            Err(ApiError::malformed_body(invalid_msg))
        }
        Err(rejection) => Err(ApiError::internal(
            "Failed to read request body",
            rejection.to_string(),
            config,
        )),
    }
}
