// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shell script template for the `prepare-commit-msg` hook.

use crate::error::{GacError, HookError, Result};
use handlebars::Handlebars;
use lazy_static::lazy_static;
use serde::Serialize;

/// Name of the hook file inside the hooks directory.
pub const HOOK_NAME: &str = "prepare-commit-msg";

/// Line identifying scripts written by gac.
pub const HOOK_MARKER: &str = "Generated by gac";

/// Name of the executable the hook runs.
pub const BINARY_NAME: &str = "gac-core";

/// Log the hook appends to on every run.
const LOG_FILE: &str = "$HOME/.gac_hook.log";

const TEMPLATE: &str = r#"#!/bin/sh
# {{marker}} v{{version}}
# Drafts a Conventional Commits message and stops the commit for review.

LOG_FILE="{{log_file}}"
COMMIT_MSG_FILE=$1
COMMIT_SOURCE=$2

echo "--- gac hook start ---" >> "$LOG_FILE"
date >> "$LOG_FILE"
echo "Args: COMMIT_MSG_FILE='$1' COMMIT_SOURCE='$2' SHA1='$3'" >> "$LOG_FILE"

# Merges, squashes and amends keep the message git prepared.
if [ -n "$COMMIT_SOURCE" ] && [ "$COMMIT_SOURCE" != "message" ] && [ "$COMMIT_SOURCE" != "template" ]; then
    echo "Commit source '$COMMIT_SOURCE' skipped." >> "$LOG_FILE"
    exit 0
fi

GAC_EXEC=""
{{#each candidates}}
{{#if on_path}}
if [ -z "$GAC_EXEC" ] && command -v {{location}} >/dev/null 2>&1; then GAC_EXEC="{{location}}"; fi
{{else}}
if [ -z "$GAC_EXEC" ] && [ -x "{{location}}" ]; then GAC_EXEC="{{location}}"; fi
{{/if}}
{{/each}}

if [ -z "$GAC_EXEC" ]; then
    echo "{{binary}} not found, commit proceeds unchanged." >> "$LOG_FILE"
    exit 0
fi

echo "Running '$GAC_EXEC'" >> "$LOG_FILE"
"$GAC_EXEC" "$COMMIT_MSG_FILE"
STATUS=$?
echo "{{binary}} exited with status $STATUS" >> "$LOG_FILE"
exit $STATUS
"#;

lazy_static! {
    static ref REGISTRY: Handlebars<'static> = {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        registry
    };
}

/// A place the hook looks for the executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Command name or path.
    pub location: String,
    /// Resolve through `PATH` instead of testing an executable path.
    pub on_path: bool,
}

impl Candidate {
    fn on_path(name: &str) -> Self {
        Self {
            location: name.to_string(),
            on_path: true,
        }
    }

    fn executable(path: &str) -> Self {
        Self {
            location: path.to_string(),
            on_path: false,
        }
    }
}

/// Ordered executable lookup; the first hit wins.
pub fn default_candidates() -> Vec<Candidate> {
    let exe = format!("{}.exe", BINARY_NAME);
    vec![
        Candidate::on_path(&exe),
        Candidate::on_path(BINARY_NAME),
        Candidate::executable(&format!("$HOME/.gac/bin/{}", exe)),
        Candidate::executable(&format!("$HOME/.local/bin/{}", exe)),
        Candidate::executable(&format!("$HOME/.local/bin/{}", BINARY_NAME)),
        Candidate::executable(&format!("./{}", exe)),
        Candidate::executable(&format!("./src/{}", exe)),
        Candidate::executable(&format!("./src/{}", BINARY_NAME)),
    ]
}

#[derive(Serialize)]
struct ScriptData<'a> {
    marker: &'a str,
    version: &'a str,
    log_file: &'a str,
    binary: &'a str,
    candidates: &'a [Candidate],
}

/// Render the hook script for the given executable candidates.
pub fn render_hook(candidates: &[Candidate]) -> Result<String> {
    let data = ScriptData {
        marker: HOOK_MARKER,
        version: crate::version::VERSION,
        log_file: LOG_FILE,
        binary: BINARY_NAME,
        candidates,
    };

    REGISTRY.render_template(TEMPLATE, &data).map_err(|e| {
        GacError::Hook(HookError::RenderFailed {
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_header() {
        let script = render_hook(&default_candidates()).unwrap();
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(HOOK_MARKER));
        assert!(script.contains(r#""$GAC_EXEC" "$COMMIT_MSG_FILE""#));
    }

    #[test]
    fn test_candidates_in_order() {
        let script = render_hook(&default_candidates()).unwrap();
        let path_lookup = script.find("command -v gac-core.exe").unwrap();
        let home_bin = script.find(r#"[ -x "$HOME/.gac/bin/gac-core.exe" ]"#).unwrap();
        let local_src = script.find(r#"[ -x "./src/gac-core" ]"#).unwrap();
        assert!(path_lookup < home_bin);
        assert!(home_bin < local_src);
    }

    #[test]
    fn test_no_html_escaping() {
        let candidates = vec![Candidate::executable("$HOME/a&b/<gac>")];
        let script = render_hook(&candidates).unwrap();
        assert!(script.contains(r#"[ -x "$HOME/a&b/<gac>" ]"#));
    }

    #[test]
    fn test_commit_source_filter() {
        let script = render_hook(&default_candidates()).unwrap();
        assert!(script.contains(r#"[ "$COMMIT_SOURCE" != "message" ]"#));
        assert!(script.contains(r#"[ "$COMMIT_SOURCE" != "template" ]"#));
    }
}
