// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message file git hands to the hook.

use crate::error::{MessageFileError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Commit message file, e.g. `.git/COMMIT_EDITMSG`.
#[derive(Debug, Clone)]
pub struct CommitMessageFile {
    path: PathBuf,
}

impl CommitMessageFile {
    /// Refer to the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            MessageFileError::ReadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Replace the file's content with `message`.
    pub fn write(&self, message: &str) -> Result<()> {
        fs::write(&self.path, message).map_err(|e| {
            MessageFileError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GacError;
    use tempfile::TempDir;

    #[test]
    fn test_read_write() {
        let dir = TempDir::new().unwrap();
        let file = CommitMessageFile::new(dir.path().join("COMMIT_EDITMSG"));

        file.write("feat: add login").unwrap();
        assert_eq!(file.read().unwrap(), "feat: add login");

        file.write("fix: shorter").unwrap();
        assert_eq!(file.read().unwrap(), "fix: shorter");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = CommitMessageFile::new(dir.path().join("missing"));
        assert!(matches!(
            file.read(),
            Err(GacError::MessageFile(MessageFileError::ReadFailed { .. }))
        ));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let file = CommitMessageFile::new(dir.path().join("nope").join("COMMIT_EDITMSG"));
        assert!(matches!(
            file.write("x"),
            Err(GacError::MessageFile(MessageFileError::WriteFailed { .. }))
        ));
    }
}
