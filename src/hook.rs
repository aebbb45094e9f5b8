//! Git pre-commit hook installation.

use crate::error::{GateError, Result};
use crate::git::GitCli;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Script written to the repository's `pre-commit` hook.
pub const PRE_COMMIT_HOOK: &str = "#!/bin/sh
# Installed by rulegate. Blocks the commit when rule files are missing or stale.
exec rulegate check
";

/// What [`install_pre_commit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookInstall {
    /// A new hook was written.
    Installed(PathBuf),
    /// An existing hook was replaced (`force`).
    Replaced(PathBuf),
    /// A hook already exists and was left untouched.
    AlreadyPresent(PathBuf),
    /// The hooks directory does not exist (not a git repository?).
    NoHooksDir(PathBuf),
}

/// Install the pre-commit hook into `project_dir`.
///
/// The hooks directory is the one git reports for `project_dir`, which
/// covers linked worktrees and submodules. When git cannot answer, the
/// conventional `.git/hooks` is used. An existing hook is only replaced when
/// `force` is set.
///
/// # Errors
///
/// Returns an error if the hook cannot be written or made executable.
pub fn install_pre_commit(project_dir: &Path, force: bool) -> Result<HookInstall> {
    let hooks_dir = GitCli::new(project_dir).hooks_dir().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Could not resolve hooks directory, assuming .git/hooks");
        project_dir.join(".git/hooks")
    });
    if !hooks_dir.is_dir() {
        return Ok(HookInstall::NoHooksDir(hooks_dir));
    }

    let path = hooks_dir.join("pre-commit");
    let existed = path.exists();
    if existed && !force {
        tracing::debug!(path = %path.display(), "pre-commit hook exists, leaving it");
        return Ok(HookInstall::AlreadyPresent(path));
    }

    fs::write(&path, PRE_COMMIT_HOOK)
        .map_err(|e| GateError::hook("pre-commit", format!("failed to write: {}", e)))?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms)?;
    }

    tracing::info!(path = %path.display(), "Installed pre-commit hook");
    Ok(if existed {
        HookInstall::Replaced(path)
    } else {
        HookInstall::Installed(path)
    })
}
