// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Prompt construction.

use crate::config::DEFAULT_LANGUAGE;
use crate::git::StagedDiff;

/// Commit types the model may choose from.
pub const ALLOWED_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore",
];

/// The text sent to the model. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptText(String);

impl PromptText {
    /// The prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PromptText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wraps a staged diff in the commit message instructions.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    language: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl PromptBuilder {
    /// Builder asking for messages written in `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// Build the prompt for `diff`.
    pub fn build(&self, diff: &StagedDiff) -> PromptText {
        PromptText(format!(
            "You are a Git commit message generator. Based on the staged changes below, \
write a commit message in {language} that follows the Conventional Commits specification.

Requirements:
1. Format: <type>(<scope>): <description>
2. Type must be one of: {types}
3. Keep the first line under 50 characters
4. If needed, add a blank line followed by a detailed body
5. Reference related issues when applicable (e.g. \"Fixes: #123\")
6. Use the imperative present tense (\"add\" not \"added\")

Staged changes:
{diff}

Output only the commit message, without any extra explanation or Markdown formatting:",
            language = self.language,
            types = ALLOWED_TYPES.join(", "),
            diff = diff.as_str(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIFF: &str = "diff --git a/src/lib.rs b/src/lib.rs\n+pub fn login() {}";

    #[test]
    fn test_prompt_contains_diff_verbatim() {
        let diff = StagedDiff::new(DIFF).unwrap();
        let prompt = PromptBuilder::default().build(&diff);
        assert!(prompt.as_str().contains(DIFF));
    }

    #[test]
    fn test_prompt_lists_rules() {
        let diff = StagedDiff::new(DIFF).unwrap();
        let prompt = PromptBuilder::default().build(&diff);
        let text = prompt.as_str();

        assert!(text.contains("<type>(<scope>): <description>"));
        assert!(text.contains("under 50 characters"));
        assert!(text.contains("imperative"));
        assert!(text.contains("Markdown"));
        for kind in ALLOWED_TYPES {
            assert!(text.contains(kind), "missing type {}", kind);
        }
    }

    #[test]
    fn test_prompt_language() {
        let diff = StagedDiff::new(DIFF).unwrap();
        assert!(PromptBuilder::default()
            .build(&diff)
            .as_str()
            .contains("in English"));
        assert!(PromptBuilder::new("Chinese")
            .build(&diff)
            .as_str()
            .contains("in Chinese"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let diff = StagedDiff::new(DIFF).unwrap();
        let builder = PromptBuilder::new("German");
        assert_eq!(builder.build(&diff), builder.build(&diff));
    }

    #[test]
    fn test_diff_with_braces_survives() {
        let raw = "+let x = format!(\"{}\", y); // {placeholder}";
        let diff = StagedDiff::new(raw).unwrap();
        assert!(PromptBuilder::default().build(&diff).as_str().contains(raw));
    }
}
