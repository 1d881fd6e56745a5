//! Input validation for the task API.
//!
//! Validators are pure: they classify a raw JSON payload as accepted
//! (returning the normalized value) or rejected (returning field-level
//! issues). They never consult the store, so "valid id" and "existing
//! task" are separate questions.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::task::TaskStatus;

/// Maximum accepted title length, in characters.
pub const TITLE_MAX: usize = 100;

/// Maximum accepted description length, in characters.
pub const DESCRIPTION_MAX: usize = 500;

/// A single validation failure, pointing at the offending field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldIssue {
    /// Path to the field within the payload
    pub path: Vec<String>,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            message: message.into(),
        }
    }
}

/// Accepted payload for task creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
}

/// Validate a `POST /tasks` payload.
pub fn validate_create(body: &Value) -> Result<CreateTask, Vec<FieldIssue>> {
    let mut issues = Vec::new();

    let title = string_field(body, "title", &mut issues);
    if let Some(title) = &title {
        match title.chars().count() {
            0 => issues.push(FieldIssue::new("title", "Title is required")),
            n if n > TITLE_MAX => issues.push(FieldIssue::new(
                "title",
                format!("Title must be less than {} characters", TITLE_MAX),
            )),
            _ => {}
        }
    }

    let description = string_field(body, "description", &mut issues);
    if let Some(description) = &description {
        match description.chars().count() {
            0 => issues.push(FieldIssue::new("description", "Description is required")),
            n if n > DESCRIPTION_MAX => issues.push(FieldIssue::new(
                "description",
                format!("Description must be less than {} characters", DESCRIPTION_MAX),
            )),
            _ => {}
        }
    }

    match (title, description) {
        (Some(title), Some(description)) if issues.is_empty() => Ok(CreateTask {
            title,
            description,
        }),
        _ => Err(issues),
    }
}

/// Validate a `PATCH /tasks/:id` payload.
pub fn validate_status(body: &Value) -> Result<TaskStatus, Vec<FieldIssue>> {
    match body.get("status") {
        Some(Value::String(s)) => match s.as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "done" => Ok(TaskStatus::Done),
            _ => Err(vec![FieldIssue::new(
                "status",
                "Expected 'pending' or 'done'",
            )]),
        },
        Some(_) => Err(vec![FieldIssue::new("status", "Expected a string")]),
        None => Err(vec![FieldIssue::new("status", "Required")]),
    }
}

/// Check a path parameter against the `task-<digits>` id format.
pub fn validate_task_id(id: &str) -> bool {
    static TASK_ID_RE: OnceLock<Regex> = OnceLock::new();
    let re = TASK_ID_RE.get_or_init(|| Regex::new(r"^task-[0-9]+$").expect("valid id pattern"));
    re.is_match(id)
}

fn string_field(body: &Value, field: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match body.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(FieldIssue::new(field, "Expected a string"));
            None
        }
        None => {
            issues.push(FieldIssue::new(field, "Required"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue_paths(issues: &[FieldIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.path[0].as_str()).collect()
    }

    #[test]
    fn test_create_accepts_valid_payload() {
        let body = json!({ "title": "Buy milk", "description": "Two liters" });
        let parsed = validate_create(&body).expect("valid payload");
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(parsed.description, "Two liters");
    }

    #[test]
    fn test_create_title_boundary() {
        let ok = json!({ "title": "a".repeat(100), "description": "D" });
        assert!(validate_create(&ok).is_ok());

        let too_long = json!({ "title": "a".repeat(101), "description": "D" });
        let issues = validate_create(&too_long).unwrap_err();
        assert_eq!(issue_paths(&issues), vec!["title"]);
        assert_eq!(issues[0].message, "Title must be less than 100 characters");
    }

    #[test]
    fn test_create_description_boundary() {
        let ok = json!({ "title": "T", "description": "a".repeat(500) });
        assert!(validate_create(&ok).is_ok());

        let too_long = json!({ "title": "T", "description": "a".repeat(501) });
        let issues = validate_create(&too_long).unwrap_err();
        assert_eq!(issue_paths(&issues), vec!["description"]);
    }

    #[test]
    fn test_create_rejects_empty_strings() {
        let body = json!({ "title": "", "description": "" });
        let issues = validate_create(&body).unwrap_err();
        assert_eq!(issue_paths(&issues), vec!["title", "description"]);
        assert_eq!(issues[0].message, "Title is required");
        assert_eq!(issues[1].message, "Description is required");
    }

    #[test]
    fn test_create_rejects_missing_fields() {
        let issues = validate_create(&json!({})).unwrap_err();
        assert_eq!(issue_paths(&issues), vec!["title", "description"]);

        let issues = validate_create(&json!({ "title": "T" })).unwrap_err();
        assert_eq!(issue_paths(&issues), vec!["description"]);
    }

    #[test]
    fn test_create_rejects_non_string_fields() {
        let body = json!({ "title": 42, "description": ["x"] });
        let issues = validate_create(&body).unwrap_err();
        assert_eq!(issue_paths(&issues), vec!["title", "description"]);
        assert_eq!(issues[0].message, "Expected a string");
    }

    #[test]
    fn test_create_rejects_non_object_payload() {
        assert!(validate_create(&json!("not an object")).is_err());
        assert!(validate_create(&json!(null)).is_err());
    }

    #[test]
    fn test_status_accepts_both_values() {
        assert_eq!(
            validate_status(&json!({ "status": "pending" })),
            Ok(TaskStatus::Pending)
        );
        assert_eq!(
            validate_status(&json!({ "status": "done" })),
            Ok(TaskStatus::Done)
        );
    }

    #[test]
    fn test_status_rejects_other_values() {
        let issues = validate_status(&json!({ "status": "finished" })).unwrap_err();
        assert_eq!(issue_paths(&issues), vec!["status"]);

        // Case sensitive
        assert!(validate_status(&json!({ "status": "Done" })).is_err());
        assert!(validate_status(&json!({ "status": 1 })).is_err());
        assert!(validate_status(&json!({})).is_err());
    }

    #[test]
    fn test_task_id_format() {
        assert!(validate_task_id("task-1"));
        assert!(validate_task_id("task-123"));

        assert!(!validate_task_id("task-"));
        assert!(!validate_task_id("task-abc"));
        assert!(!validate_task_id("Task-1"));
        assert!(!validate_task_id("task--1"));
        assert!(!validate_task_id(""));
        assert!(!validate_task_id("task-1 "));
        assert!(!validate_task_id("xtask-1"));
    }
}
