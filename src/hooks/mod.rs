// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hook management.

mod manager;
pub mod templates;

pub use manager::{HookManager, InstallResult};
pub use templates::{render_hook, Candidate, HOOK_MARKER, HOOK_NAME};
