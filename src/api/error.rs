//! API error taxonomy and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::Config;
use crate::validate::FieldIssue;

/// Errors a handler can surface to the client.
///
/// Every variant renders as the uniform `{success: false, error, ...}`
/// envelope; no other error shape ever reaches the wire.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client payload failed validation (400).
    #[error("{error}")]
    Validation {
        error: String,
        /// Field-level issues, when the failure is attributable to fields
        details: Option<Vec<FieldIssue>>,
    },

    /// The target of the operation does not exist (404).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Anything unexpected (500). `detail` is echoed to the client only
    /// when the server runs in development mode.
    #[error("{error}")]
    Internal {
        error: String,
        detail: Option<String>,
    },
}

impl ApiError {
    /// 400 for a create payload that failed validation.
    pub fn invalid_input(details: Vec<FieldIssue>) -> Self {
        Self::Validation {
            error: "Invalid input data".to_string(),
            details: Some(details),
        }
    }

    /// 400 for a status payload that failed validation.
    pub fn invalid_status(details: Vec<FieldIssue>) -> Self {
        Self::Validation {
            error: "Invalid status data".to_string(),
            details: Some(details),
        }
    }

    /// 400 for a path parameter that does not match the id format.
    pub fn invalid_task_id() -> Self {
        Self::Validation {
            error: "Invalid task ID".to_string(),
            details: None,
        }
    }

    /// 400 for a request body that could not be parsed at all.
    pub fn malformed_body(error: impl Into<String>) -> Self {
        Self::Validation {
            error: error.into(),
            details: None,
        }
    }

    pub fn task_not_found() -> Self {
        Self::NotFound("Task")
    }

    /// 500 with a generic message. The underlying detail is kept out of
    /// the response unless the server runs in development mode.
    pub fn internal(error: impl Into<String>, detail: impl Into<String>, config: &Config) -> Self {
        Self::Internal {
            error: error.into(),
            detail: config.is_development().then(|| detail.into()),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `{success: false, ...}` envelope for this error.
    pub fn body(&self) -> Value {
        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });
        match self {
            ApiError::Validation {
                details: Some(details),
                ..
            } => {
                body["details"] = json!(details);
            }
            ApiError::Internal {
                detail: Some(detail),
                ..
            } => {
                body["detail"] = json!(detail);
            }
            _ => {}
        }
        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Internal { .. }) {
            tracing::error!("Request failed: {}", self);
        }
        (self.status(), Json(self.body())).into_response()
    }
}
