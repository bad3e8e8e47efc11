// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message pipeline run by the `prepare-commit-msg` hook.
//!
//! ```text
//! validate repo -> classify -> skip         -> write stripped message
//!                           -> conventional -> leave file alone
//!                           -> generate     -> diff -> prompt -> complete
//!                                              -> sanitize -> write, ask for review
//! ```
//!
//! Every failure ends the run. The message file is only written on the skip
//! path and after a successful generation. Settings needed only for
//! generation can be supplied lazily, so the skip and conventional paths never
//! depend on them.

use crate::commit::{classify, sanitize, Classification, CommitMessageFile};
use crate::error::Result;
use crate::git::DiffSource;
use crate::llm::{CompletionBackend, PromptBuilder};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The skip marker was present; the file now holds `message`.
    Skipped { message: String },
    /// The message was already conventional and was left untouched.
    AlreadyConventional,
    /// A message was generated and written. The commit must be interrupted
    /// so the user can review it.
    ReviewRequired { message: String },
}

impl Outcome {
    /// Whether the commit has to be stopped for review.
    pub fn requires_review(&self) -> bool {
        matches!(self, Outcome::ReviewRequired { .. })
    }

    /// Process exit code for this outcome. Non-zero aborts the commit.
    pub fn exit_code(&self) -> i32 {
        if self.requires_review() {
            1
        } else {
            0
        }
    }
}

/// Where the generate path gets its prompt builder from.
enum PromptSource<'a> {
    Fixed(PromptBuilder),
    Deferred(&'a dyn Fn() -> Result<PromptBuilder>),
}

/// Sequences classification, diff retrieval, prompting and sanitization.
pub struct Pipeline<'a, D, C> {
    diff_source: &'a D,
    backend: &'a C,
    prompts: PromptSource<'a>,
}

impl<'a, D: DiffSource, C: CompletionBackend> Pipeline<'a, D, C> {
    /// Create a pipeline with the default prompt.
    pub fn new(diff_source: &'a D, backend: &'a C) -> Self {
        Self {
            diff_source,
            backend,
            prompts: PromptSource::Fixed(PromptBuilder::default()),
        }
    }

    /// Use a specific prompt builder.
    pub fn with_prompt_builder(mut self, prompt_builder: PromptBuilder) -> Self {
        self.prompts = PromptSource::Fixed(prompt_builder);
        self
    }

    /// Resolve the prompt builder only once a staged diff exists.
    ///
    /// An error from `resolve` ends the run before the model is called.
    pub fn with_deferred_prompt_builder(
        mut self,
        resolve: &'a dyn Fn() -> Result<PromptBuilder>,
    ) -> Self {
        self.prompts = PromptSource::Deferred(resolve);
        self
    }

    /// Run the pipeline against the commit message file.
    pub fn run(&self, file: &CommitMessageFile) -> Result<Outcome> {
        self.diff_source.validate_repo()?;

        match self.classify(file) {
            Classification::Skip { message } => {
                file.write(&message)?;
                tracing::info!("Skip marker found, keeping the user's message");
                Ok(Outcome::Skipped { message })
            }
            Classification::AlreadyConventional => {
                tracing::info!("Message is already conventional, nothing to do");
                Ok(Outcome::AlreadyConventional)
            }
            Classification::NeedsGeneration => self.generate(file),
        }
    }

    fn classify(&self, file: &CommitMessageFile) -> Classification {
        match file.read() {
            Ok(content) => classify(&content),
            Err(e) => {
                // The file may not exist yet when the hook fires.
                tracing::debug!("Treating unreadable message file as empty: {}", e);
                Classification::NeedsGeneration
            }
        }
    }

    fn generate(&self, file: &CommitMessageFile) -> Result<Outcome> {
        let diff = self.diff_source.staged_diff()?;
        let prompt = match &self.prompts {
            PromptSource::Fixed(builder) => builder.build(&diff),
            PromptSource::Deferred(resolve) => resolve()?.build(&diff),
        };
        let raw = self.backend.complete(&prompt)?;
        let message = sanitize(&raw);

        file.write(&message)?;
        tracing::info!(
            lines = message.lines().count(),
            "Generated commit message written to {:?}",
            file.path()
        );

        Ok(Outcome::ReviewRequired { message })
    }
}
