use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::{DatasetIssue, DatasetSummary};

pub(crate) const DATASET_HELP_COMMAND: &str = "campwatch dataset check --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `campwatch {cmd} --help` for usage."),
            None => "Run `campwatch --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn dataset_not_found(path: &str) -> Self {
        Self::new(
            "dataset_not_found",
            &format!("Dataset file `{path}` was not found."),
            vec![
                "Check the path for typos.".to_string(),
                "Pass `-` as the path to read the dataset from stdin.".to_string(),
            ],
        )
        .with_data(json!({
            "path": path,
        }))
    }

    pub fn dataset_unreadable(path: &str, detail: &str) -> Self {
        Self::new(
            "dataset_unreadable",
            &format!("Dataset file `{path}` could not be read: {detail}"),
            vec![
                "Confirm the file is readable UTF-8 text.".to_string(),
                format!("Run `{DATASET_HELP_COMMAND}` for the expected layout."),
            ],
        )
        .with_data(json!({
            "path": path,
        }))
    }

    pub fn dataset_empty() -> Self {
        Self::new(
            "dataset_empty",
            "Dataset source is empty.",
            vec![
                "Provide a delimited file with a header row and at least the header.".to_string(),
                format!("Run `{DATASET_HELP_COMMAND}` for the expected columns."),
            ],
        )
    }

    pub fn dataset_schema_mismatch(
        required_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        Self::new(
            "dataset_schema_mismatch",
            "Dataset headers do not match the contribution schema.",
            vec![
                "Include every required header; do not include unknown headers.".to_string(),
                format!("Run `{DATASET_HELP_COMMAND}` to review the required columns."),
            ],
        )
        .with_data(json!({
            "required_headers": required_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn dataset_validation_failed(summary: DatasetSummary, issues: Vec<DatasetIssue>) -> Self {
        let issue_count = summary.rows_invalid;
        Self::new(
            "dataset_validation_failed",
            &format!("Dataset failed validation: {issue_count} rows need fixes."),
            vec![
                "Fix the listed issues in your source file.".to_string(),
                "Rerun `campwatch dataset check <path>` until it passes.".to_string(),
            ],
        )
        .with_data(json!({
            "summary": summary,
            "issues": issues,
        }))
    }

    pub fn report_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "report_write_failed",
            &format!("Could not write report to `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or pass a different `--out` path."
            )],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
