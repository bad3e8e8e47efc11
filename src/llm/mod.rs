// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Language model access: prompt construction and the completion client.

pub mod client;
pub mod prompt;

pub use client::{CompletionBackend, CompletionClient};
pub use prompt::{PromptBuilder, PromptText};
