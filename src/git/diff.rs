// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Staged diff retrieval.

use crate::error::{GacError, GitError, Result};
use std::path::PathBuf;
use std::process::Command;

use super::repo::Repository;

/// Unified diff of the staged changes. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDiff(String);

impl StagedDiff {
    /// Wrap diff output, rejecting output that is blank once trimmed.
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GacError::Git(GitError::NoStagedChanges));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The diff text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StagedDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the pipeline gets its repository check and staged changes from.
pub trait DiffSource {
    /// Fail unless the working directory is inside a repository.
    fn validate_repo(&self) -> Result<()>;

    /// The staged changes, as a unified diff.
    fn staged_diff(&self) -> Result<StagedDiff>;
}

/// [`DiffSource`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitDiffSource {
    dir: PathBuf,
}

impl GitDiffSource {
    /// Diff source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Diff source rooted at the current directory.
    pub fn current_dir() -> Result<Self> {
        let dir = std::env::current_dir().map_err(|e| {
            GacError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Ok(Self::new(dir))
    }
}

impl DiffSource for GitDiffSource {
    fn validate_repo(&self) -> Result<()> {
        let repo = Repository::open(&self.dir)?;
        tracing::debug!("Using repository at {:?}", repo.workdir());
        Ok(())
    }

    fn staged_diff(&self) -> Result<StagedDiff> {
        let command = "git diff --staged";
        tracing::debug!("Running `{}` in {:?}", command, self.dir);

        let output = Command::new("git")
            .args(["diff", "--staged"])
            .current_dir(&self.dir)
            .output()
            .map_err(|e| {
                GacError::Git(GitError::CommandFailed {
                    command: command.to_string(),
                    code: None,
                    stderr: format!("Failed to run git: {}", e),
                })
            })?;

        if !output.status.success() {
            return Err(GacError::Git(GitError::CommandFailed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }));
        }

        let diff = StagedDiff::new(String::from_utf8_lossy(&output.stdout))?;
        tracing::debug!("Staged diff is {} bytes", diff.as_str().len());
        Ok(diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {:?} failed", args);
    }

    fn init_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        dir
    }

    #[test]
    fn test_staged_diff_rejects_blank() {
        assert!(matches!(
            StagedDiff::new("  \n\t"),
            Err(GacError::Git(GitError::NoStagedChanges))
        ));
    }

    #[test]
    fn test_staged_diff_trims() {
        let diff = StagedDiff::new("\ndiff --git a/x b/x\n\n").unwrap();
        assert_eq!(diff.as_str(), "diff --git a/x b/x");
    }

    #[test]
    fn test_staged_changes_are_returned() {
        let dir = init_repo();
        fs::write(dir.path().join("hello.txt"), "hello world\n").unwrap();
        git(dir.path(), &["add", "hello.txt"]);

        let source = GitDiffSource::new(dir.path());
        source.validate_repo().unwrap();
        let diff = source.staged_diff().unwrap();

        assert!(diff.as_str().contains("hello.txt"));
        assert!(diff.as_str().contains("+hello world"));
    }

    #[test]
    fn test_unstaged_changes_are_ignored() {
        let dir = init_repo();
        fs::write(dir.path().join("draft.txt"), "not staged\n").unwrap();

        let result = GitDiffSource::new(dir.path()).staged_diff();
        assert!(matches!(
            result,
            Err(GacError::Git(GitError::NoStagedChanges))
        ));
    }

    #[test]
    fn test_validate_outside_repo() {
        let dir = TempDir::new().unwrap();
        let result = GitDiffSource::new(dir.path()).validate_repo();
        assert!(matches!(
            result,
            Err(GacError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_diff_outside_repo_is_command_failure() {
        let dir = TempDir::new().unwrap();
        let result = GitDiffSource::new(dir.path()).staged_diff();
        match result {
            Err(GacError::Git(GitError::CommandFailed { command, code, .. })) => {
                assert_eq!(command, "git diff --staged");
                assert!(code.is_some_and(|c| c != 0));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }
}
