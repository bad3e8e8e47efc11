// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Spinner shown while the model is working.

use crate::error::Result;
use crate::llm::{CompletionBackend, PromptText};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Wraps a backend and shows a spinner on stderr for the duration of a call.
///
/// The spinner hides itself when stderr is not a terminal.
pub struct WithSpinner<'a, C> {
    inner: &'a C,
    message: &'static str,
}

impl<'a, C: CompletionBackend> WithSpinner<'a, C> {
    pub fn new(inner: &'a C) -> Self {
        Self {
            inner,
            message: "Generating commit message...",
        }
    }
}

impl<C: CompletionBackend> CompletionBackend for WithSpinner<'_, C> {
    fn complete(&self, prompt: &PromptText) -> Result<String> {
        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(self.message);
        pb.enable_steady_tick(Duration::from_millis(150));

        let result = self.inner.complete(prompt);
        pb.finish_and_clear();
        result
    }
}
