// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for gac.
//!
//! Every failure of a hook run is terminal: nothing here is retried. The
//! review-required interruption is deliberately absent from this module, see
//! [`crate::pipeline::Outcome`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gac operations.
#[derive(Error, Debug)]
pub enum GacError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Language model errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    // Commit message file errors
    #[error("Commit message file error: {0}")]
    MessageFile(#[from] MessageFileError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error(
        "API key is not configured. Set the GAC_API_KEY environment variable or add llm.api_key to .gac_config.json"
    )]
    MissingApiKey,
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("Git command failed: {command} (exit code {}) - {stderr}", exit_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Errors talking to the chat-completion endpoint.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request to the completion endpoint failed: {message}")]
    Transport { message: String },

    #[error("Completion endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode completion response: {message}")]
    Decode { message: String },

    #[error("Completion response contained no choices")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("timed out: {}", err)
        } else {
            err.to_string()
        };
        LlmError::Transport { message }
    }
}

/// Errors reading or writing the commit message file.
#[derive(Error, Debug)]
pub enum MessageFileError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },

    #[error("Failed to render hook script: {message}")]
    RenderFailed { message: String },
}

/// Result type alias for gac operations.
pub type Result<T> = std::result::Result<T, GacError>;
