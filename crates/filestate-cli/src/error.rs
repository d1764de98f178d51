//! Error types for filestate-cli

use filestate_core::FailureKind;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from filestate-core
    #[error(transparent)]
    Core(#[from] filestate_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Failure already reported to the host; carries only the exit code
    #[error("invocation failed")]
    Reported { code: i32 },
}

impl CliError {
    /// Process exit code: 1 for I/O failures, 2 for validation failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(e) => match e.kind() {
                FailureKind::Io => 1,
                FailureKind::Validation => 2,
            },
            Self::Reported { code } => *code,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_keeps_code() {
        assert_eq!(CliError::Reported { code: 1 }.exit_code(), 1);
    }

    #[test]
    fn test_core_error_exit_codes() {
        let validation: CliError = filestate_core::Error::MissingField { field: "path" }.into();
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(validation.to_string(), "missing required argument: path");

        let io: CliError = filestate_core::Error::NotAFile {
            path: "/tmp".into(),
        }
        .into();
        assert_eq!(io.exit_code(), 1);
    }
}
