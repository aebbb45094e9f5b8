//! Version-control queries the gate depends on.
//!
//! Both queries degrade instead of failing: a repository without commits
//! yields an empty commit message, and an unusable index reads as "nothing
//! staged". The gate never aborts because git could not answer.

use crate::error::{GateError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Abstraction for the two git facts the gate consumes.
///
/// # Example
///
/// ```rust,ignore
/// use rulegate::git::GitOperations;
///
/// fn commit_in_progress(git: &impl GitOperations) -> bool {
///     git.has_staged_changes()
/// }
/// ```
pub trait GitOperations {
    /// Message of the most recent commit, trimmed.
    ///
    /// Returns an empty string if it cannot be determined.
    fn last_commit_message(&self) -> String;

    /// Whether any files are staged for the next commit.
    ///
    /// Returns `false` if the index cannot be read.
    fn has_staged_changes(&self) -> bool;
}

/// [`GitOperations`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Directory git commands run in
    repo_path: PathBuf,
}

impl GitCli {
    /// Create a new `GitCli` running commands in `repo_path`.
    #[must_use]
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Run a git subcommand and return its stdout.
    fn run(&self, operation: &str, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GateError::git(operation, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GateError::git(operation, stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Names of the files currently staged.
    ///
    /// # Errors
    ///
    /// Returns an error if git is unavailable or the path is not a repository.
    pub fn staged_files(&self) -> Result<Vec<String>> {
        let stdout = self.run("diff --cached", &["diff", "--cached", "--name-only"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    /// Directory git reads hooks from.
    ///
    /// Resolved by git itself, so linked worktrees, submodules and
    /// `core.hooksPath` all point at the directory git will actually run.
    ///
    /// # Errors
    ///
    /// Returns an error if git is unavailable or the path is not a repository.
    pub fn hooks_dir(&self) -> Result<PathBuf> {
        let stdout = self.run("rev-parse", &["rev-parse", "--git-path", "hooks"])?;
        let hooks = PathBuf::from(stdout.trim());
        if hooks.is_absolute() {
            Ok(hooks)
        } else {
            Ok(self.repo_path.join(hooks))
        }
    }
}

impl GitOperations for GitCli {
    fn last_commit_message(&self) -> String {
        match self.run("log", &["log", "-1", "--pretty=%B"]) {
            Ok(message) => message.trim().to_string(),
            Err(e) => {
                tracing::debug!(error = %e, "Could not read last commit message");
                String::new()
            }
        }
    }

    fn has_staged_changes(&self) -> bool {
        match self.staged_files() {
            Ok(files) => {
                tracing::debug!(staged = files.len(), "Read staged files");
                !files.is_empty()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Could not list staged files");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn test_outside_repository_degrades_to_defaults() {
        let temp = TempDir::new().unwrap();
        let cli = GitCli::new(temp.path());

        assert_eq!(cli.last_commit_message(), "");
        assert!(!cli.has_staged_changes());
    }

    #[test]
    fn test_missing_directory_degrades_to_defaults() {
        let cli = GitCli::new("/nonexistent/rulegate/repo");
        assert_eq!(cli.last_commit_message(), "");
        assert!(!cli.has_staged_changes());
    }

    #[test]
    fn test_hooks_dir_outside_repository_is_error() {
        let temp = TempDir::new().unwrap();
        let err = GitCli::new(temp.path()).hooks_dir().unwrap_err();
        assert!(matches!(err, GateError::Git { .. }));
    }

    #[test]
    fn test_hooks_dir_in_plain_repository() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        git(temp.path(), &["init", "-q"]);

        let hooks = GitCli::new(temp.path()).hooks_dir().unwrap();
        assert!(hooks.ends_with(".git/hooks"));
        assert!(hooks.is_dir());
    }

    #[test]
    fn test_staged_files_and_commit_message() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        git(dir, &["init", "-q"]);

        let cli = GitCli::new(dir);
        // Fresh repository: no commits, nothing staged.
        assert_eq!(cli.last_commit_message(), "");
        assert!(!cli.has_staged_changes());

        std::fs::write(dir.join("README.md"), "hello").unwrap();
        git(dir, &["add", "README.md"]);
        assert!(cli.has_staged_changes());
        assert_eq!(cli.staged_files().unwrap(), vec!["README.md".to_string()]);

        git(
            dir,
            &[
                "-c",
                "user.name=Gate Test",
                "-c",
                "user.email=gate@example.com",
                "commit",
                "-q",
                "-m",
                "docs: add readme (Quality Gate: Reviewed)",
            ],
        );
        assert_eq!(
            cli.last_commit_message(),
            "docs: add readme (Quality Gate: Reviewed)"
        );
        assert!(!cli.has_staged_changes());
    }
}
