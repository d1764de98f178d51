//! Error types for filestate-core

use std::fmt;
use std::path::PathBuf;

/// Result type for filestate-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// The filesystem step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// Checking whether the target exists
    Inspect,
    /// Reading the current content
    Read,
    /// Writing the desired content
    Write,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inspect => "inspect",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}

/// Coarse failure class reported to the invoking host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Parameters were missing or malformed; nothing was attempted
    Validation,
    /// The filesystem refused an inspect, read or write
    Io,
}

/// Errors that can occur in filestate-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required argument: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Failed to parse {format} parameters at {path}: {message}")]
    ParamsParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported parameter file format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("Existing content of {path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, operation: IoOperation, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Which side of the host taxonomy this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingField { .. }
            | Self::Validation { .. }
            | Self::ParamsParse { .. }
            | Self::UnsupportedFormat { .. } => FailureKind::Validation,
            Self::Io { .. } | Self::NotAFile { .. } | Self::Encoding { .. } => FailureKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path_and_operation() {
        let err = Error::io(
            "/tmp/x.txt",
            IoOperation::Write,
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to write /tmp/x.txt: No such file or directory"
        );
        assert_eq!(err.kind(), FailureKind::Io);
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            Error::MissingField { field: "path" }.kind(),
            FailureKind::Validation
        );
        assert_eq!(
            Error::UnsupportedFormat {
                extension: "ini".into()
            }
            .kind(),
            FailureKind::Validation
        );
        assert_eq!(
            Error::NotAFile {
                path: PathBuf::from("/tmp")
            }
            .kind(),
            FailureKind::Io
        );
    }
}
