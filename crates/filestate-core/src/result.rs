//! Result and outcome types reported back to the host

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FailureKind;
use crate::Error;

/// Report of a single reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileResult {
    /// Whether the file was (or, under dry-run, would be) written
    pub changed: bool,
    /// Echo of the requested path
    pub path: String,
    /// The desired content that was considered
    pub content: String,
    /// Whether a regular file existed before the call
    #[serde(rename = "file_exists")]
    pub existed_before: bool,
}

impl ReconcileResult {
    pub(crate) fn new(path: &Path, content: &str, existed_before: bool, changed: bool) -> Self {
        Self {
            changed,
            path: path.to_string_lossy().into_owned(),
            content: content.to_string(),
            existed_before,
        }
    }
}

/// Final state of an invocation, as seen by the host.
///
/// Failures carry only a message; no `changed` state is implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(ReconcileResult),
    ValidationFailure(String),
    IoFailure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success(_) => 0,
            Self::IoFailure(_) => 1,
            Self::ValidationFailure(_) => 2,
        }
    }

    /// Host result object for this outcome.
    ///
    /// Success yields `changed`, `path`, `content` and `file_exists`;
    /// failure yields `failed` and `msg`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Success(result) => serde_json::json!({
                "changed": result.changed,
                "path": result.path,
                "content": result.content,
                "file_exists": result.existed_before,
            }),
            Self::ValidationFailure(msg) | Self::IoFailure(msg) => serde_json::json!({
                "failed": true,
                "msg": msg,
            }),
        }
    }
}

impl From<Error> for Outcome {
    fn from(err: Error) -> Self {
        match err.kind() {
            FailureKind::Validation => Self::ValidationFailure(err.to_string()),
            FailureKind::Io => Self::IoFailure(err.to_string()),
        }
    }
}

impl From<crate::Result<ReconcileResult>> for Outcome {
    fn from(result: crate::Result<ReconcileResult>) -> Self {
        match result {
            Ok(result) => Self::Success(result),
            Err(err) => err.into(),
        }
    }
}
