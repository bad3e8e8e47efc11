// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Repository discovery goes through git2; the staged diff comes from the
//! `git` executable so it matches what the user sees with `git diff --staged`.

pub mod diff;
mod repo;

pub use diff::{DiffSource, GitDiffSource, StagedDiff};
pub use repo::{open_repo, Repository};
