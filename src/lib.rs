// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gac - Conventional Commits messages drafted by an LLM
//!
//! Runs from git's `prepare-commit-msg` hook. Messages carrying the `[skip]`
//! marker or already starting with a conventional type are left to the user;
//! otherwise the staged diff is sent to a chat-completion endpoint and the
//! answer is written back to the message file for review.
//!
//! # Example
//!
//! ```no_run
//! use gac::commit::CommitMessageFile;
//! use gac::git::GitDiffSource;
//! use gac::llm::{CompletionClient, PromptBuilder};
//! use gac::pipeline::Pipeline;
//!
//! let config = gac::config::load_config()?;
//! let diff_source = GitDiffSource::current_dir()?;
//! let client = CompletionClient::from_config(&config.llm);
//!
//! let outcome = Pipeline::new(&diff_source, &client)
//!     .with_prompt_builder(PromptBuilder::new(&config.llm.language))
//!     .run(&CommitMessageFile::new(".git/COMMIT_EDITMSG"))?;
//!
//! std::process::exit(outcome.exit_code());
//! # Ok::<(), gac::GacError>(())
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod llm;
pub mod pipeline;

// Re-exports for convenience
pub use config::GacConfig;
pub use error::{GacError, Result};
pub use pipeline::{Outcome, Pipeline};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of gac.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
