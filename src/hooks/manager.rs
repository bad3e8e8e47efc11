// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing the gac hook.

use crate::error::{GacError, HookError, Result};
use crate::git;
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use super::templates::{default_candidates, render_hook, HOOK_MARKER, HOOK_NAME};

/// What `install` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallResult {
    /// The hook was written; no hook existed before.
    Installed,
    /// A previous gac hook was rewritten.
    Updated,
    /// A foreign hook was moved to the given backup path first.
    Replaced { backup: PathBuf },
}

/// Manager for the `prepare-commit-msg` hook.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Ok(Self::for_hooks_dir(repo.hooks_dir()))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn for_hooks_dir(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    /// Path the hook is installed at.
    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", HOOK_NAME))
    }

    /// Install the hook.
    ///
    /// A hook not written by gac is left alone unless `force` is set, in
    /// which case it is kept as `prepare-commit-msg.backup`.
    pub fn install(&self, force: bool) -> Result<InstallResult> {
        let hook_path = self.hook_path();

        if !self.hooks_dir.exists() {
            fs::create_dir_all(&self.hooks_dir)
                .map_err(|e| install_error(format!("Failed to create hooks directory: {}", e)))?;
        }

        let result = if !hook_path.exists() {
            InstallResult::Installed
        } else if self.is_gac_hook(&hook_path)? {
            InstallResult::Updated
        } else if force {
            let backup = self.backup_path();
            fs::rename(&hook_path, &backup)
                .map_err(|e| install_error(format!("Failed to backup existing hook: {}", e)))?;
            InstallResult::Replaced { backup }
        } else {
            return Err(GacError::Hook(HookError::AlreadyExists {
                hook: HOOK_NAME.to_string(),
            }));
        };

        let script = render_hook(&default_candidates())?;
        fs::write(&hook_path, script)
            .map_err(|e| install_error(format!("Failed to write hook: {}", e)))?;

        make_executable(&hook_path)?;

        tracing::debug!("Installed {} at {:?} ({:?})", HOOK_NAME, hook_path, result);
        Ok(result)
    }

    /// Remove the hook, restoring a backed-up hook if there is one.
    ///
    /// Returns `false` when no hook was installed.
    pub fn uninstall(&self) -> Result<bool> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(false);
        }

        if !self.is_gac_hook(&hook_path)? {
            return Err(GacError::Hook(HookError::RemoveFailed {
                hook: HOOK_NAME.to_string(),
                message: "Hook was not installed by gac".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            GacError::Hook(HookError::RemoveFailed {
                hook: HOOK_NAME.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup = self.backup_path();
        if backup.exists() {
            fs::rename(&backup, &hook_path).map_err(|e| {
                GacError::Hook(HookError::RemoveFailed {
                    hook: HOOK_NAME.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(true)
    }

    /// Check if a hook was installed by gac.
    fn is_gac_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path)
            .map_err(|e| install_error(format!("Failed to read existing hook: {}", e)))?;
        Ok(content.contains(HOOK_MARKER))
    }
}

fn install_error(message: String) -> GacError {
    GacError::Hook(HookError::InstallFailed {
        hook: HOOK_NAME.to_string(),
        message,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    let mut perms = fs::metadata(path)
        .map_err(|e| install_error(format!("Failed to get permissions: {}", e)))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_error(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
