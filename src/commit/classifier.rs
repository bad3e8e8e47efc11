// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Decides whether the hook should generate a message at all.

use lazy_static::lazy_static;
use regex::Regex;

/// Marker that tells the hook to leave the message alone.
pub const SKIP_MARKER: &str = "[skip]";

/// Type prefixes that mark a message as already conventional.
pub const CONVENTIONAL_PREFIXES: &[&str] = &[
    "feat:",
    "fix:",
    "chore:",
    "docs:",
    "style:",
    "refactor:",
    "perf:",
    "test:",
    "build:",
    "ci:",
];

lazy_static! {
    /// Matches a lowercased message that starts with a conventional prefix.
    static ref CONVENTIONAL_REGEX: Regex = {
        let alternatives: Vec<String> = CONVENTIONAL_PREFIXES
            .iter()
            .map(|p| regex::escape(p))
            .collect();
        Regex::new(&format!("^(?:{})", alternatives.join("|"))).unwrap()
    };
}

/// What to do with the current commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The user opted out. `message` is what remains after the marker.
    Skip { message: String },
    /// The message already follows the convention.
    AlreadyConventional,
    /// A message has to be generated.
    NeedsGeneration,
}

/// Classify the raw content of the commit message file.
pub fn classify(content: &str) -> Classification {
    if let Some(message) = strip_skip_marker(content) {
        return Classification::Skip { message };
    }

    if is_conventional(content) {
        return Classification::AlreadyConventional;
    }

    Classification::NeedsGeneration
}

/// Check whether a message starts with one of the conventional prefixes.
pub fn is_conventional(content: &str) -> bool {
    CONVENTIONAL_REGEX.is_match(&content.to_lowercase())
}

fn strip_skip_marker(content: &str) -> Option<String> {
    let head = content.get(..SKIP_MARKER.len())?;
    if !head.eq_ignore_ascii_case(SKIP_MARKER) {
        return None;
    }
    Some(content[SKIP_MARKER.len()..].trim().to_string())
}
