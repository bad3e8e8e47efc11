// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling: classification, cleanup and file access.

pub mod classifier;
mod file;
pub mod sanitizer;

pub use classifier::{classify, is_conventional, Classification};
pub use file::CommitMessageFile;
pub use sanitizer::sanitize;
