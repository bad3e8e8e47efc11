// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Cleanup of raw model output.

/// Leading decorations removed from each line, checked in this order.
const DECORATIONS: &[&str] = &["```", "- ", "* "];

/// Strip markdown fences and bullet markers from a generated message.
///
/// Each line is trimmed, loses at most one leading decoration and is trimmed
/// again. Lines left empty are dropped; the rest keep their order.
pub fn sanitize(raw: &str) -> String {
    raw.lines()
        .map(|line| strip_decoration(line.trim()).trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_decoration(line: &str) -> &str {
    DECORATIONS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .unwrap_or(line)
}
