//! Scoped file I/O for the reconciled target
//!
//! Every handle opened here is dropped before the function returns, on
//! success and error paths alike.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::error::IoOperation;
use crate::{Error, Result};

/// Observed state of the target before any mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    /// Nothing exists at the path
    Missing,
    /// A regular file exists with this content
    Present(String),
}

impl FileState {
    pub fn exists(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Inspect the target, reading its content if it is a regular file.
///
/// Symlinks are followed. A directory or any other non-regular file is an
/// error rather than [`FileState::Missing`].
pub fn inspect(path: &Path) -> Result<FileState> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(FileState::Missing),
        Err(e) => return Err(Error::io(path, IoOperation::Inspect, e)),
    };

    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    read_text(path).map(FileState::Present)
}

/// Read the full content of a file as UTF-8 text.
///
/// Bytes are compared as-is later on, so no newline translation happens here.
pub fn read_text(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| Error::io(path, IoOperation::Read, e))?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| Error::io(path, IoOperation::Read, e))?;

    String::from_utf8(bytes).map_err(|source| Error::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the content of a file, creating it if needed.
///
/// Truncates then writes the whole buffer in one call. Parent directories
/// are not created; a missing parent is reported as an I/O error.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, IoOperation::Write, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, IoOperation::Write, e))?;

    file.flush()
        .map_err(|e| Error::io(path, IoOperation::Write, e))
}
