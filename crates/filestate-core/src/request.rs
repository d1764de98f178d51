//! Request types and parameter validation
//!
//! Host parameters arrive loosely typed as [`ModuleParams`] and are turned
//! into a [`ReconcileRequest`] by [`ModuleParams::validate`] before any
//! filesystem access.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Parameters as supplied by the invoking host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleParams {
    /// Target file path
    #[serde(default)]
    pub path: Option<String>,
    /// Desired file content
    #[serde(default)]
    pub content: Option<String>,
    /// Report what would change without writing
    #[serde(default)]
    pub check_mode: bool,
}

impl ModuleParams {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            content: Some(content.into()),
            check_mode: false,
        }
    }

    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    /// Validate required fields and build a request.
    ///
    /// `path` must be present and non-empty. `content` must be present but
    /// may be empty.
    pub fn validate(self) -> Result<ReconcileRequest> {
        let path = match self.path {
            None => return Err(Error::MissingField { field: "path" }),
            Some(p) if p.is_empty() => return Err(Error::MissingField { field: "path" }),
            Some(p) => p,
        };

        if path.contains('\0') {
            return Err(Error::validation("path", "contains a NUL byte"));
        }

        let content = self.content.ok_or(Error::MissingField { field: "content" })?;

        Ok(ReconcileRequest {
            path: PathBuf::from(path),
            content,
            dry_run: self.check_mode,
        })
    }
}

/// A validated reconciliation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileRequest {
    path: PathBuf,
    content: String,
    dry_run: bool,
}

impl ReconcileRequest {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Same request with dry-run forced on or off.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_builds_request() {
        let request = ModuleParams::new("/tmp/a.txt", "hello")
            .with_check_mode(true)
            .validate()
            .unwrap();

        assert_eq!(request.path(), Path::new("/tmp/a.txt"));
        assert_eq!(request.content(), "hello");
        assert!(request.dry_run());
    }

    #[test]
    fn test_validate_allows_empty_content() {
        let request = ModuleParams::new("/tmp/a.txt", "").validate().unwrap();
        assert_eq!(request.content(), "");
        assert!(!request.dry_run());
    }

    #[test]
    fn test_validate_rejects_nul_in_path() {
        let err = ModuleParams::new("/tmp/a\0b", "x").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "path", .. }));
    }

    #[test]
    fn test_with_dry_run_overrides() {
        let request = ModuleParams::new("a.txt", "x")
            .validate()
            .unwrap()
            .with_dry_run(true);
        assert!(request.dry_run());
    }
}
