//! Mock implementations of the gate's external seams.
//!
//! These mocks provide controllable test doubles for git and the file
//! system, enabling deterministic tests of the validator.

use crate::error::{GateError, Result};
use crate::fs::RuleFileSystem;
use crate::git::GitOperations;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

/// Mock implementation of git operations.
///
/// Counts how often each query is made so tests can assert that the gate
/// asks git at most once per run.
///
/// # Example
///
/// ```rust,ignore
/// let git = MockGitOperations::new()
///     .with_staged_files(vec!["src/main.rs".to_string()])
///     .with_commit_message("feat: add component");
///
/// assert!(git.has_staged_changes());
/// ```
#[derive(Debug, Default)]
pub struct MockGitOperations {
    commit_message: String,
    staged_files: Vec<String>,
    message_queries: AtomicU32,
    staged_queries: AtomicU32,
}

impl MockGitOperations {
    /// Create a new mock: no commits, nothing staged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the last commit message to return.
    #[must_use]
    pub fn with_commit_message(mut self, message: &str) -> Self {
        self.commit_message = message.to_string();
        self
    }

    /// Set the list of staged files.
    #[must_use]
    pub fn with_staged_files(mut self, files: Vec<String>) -> Self {
        self.staged_files = files;
        self
    }

    /// Number of times the last commit message was requested.
    pub fn message_queries(&self) -> u32 {
        self.message_queries.load(Ordering::SeqCst)
    }

    /// Number of times staged changes were requested.
    pub fn staged_queries(&self) -> u32 {
        self.staged_queries.load(Ordering::SeqCst)
    }
}

impl GitOperations for MockGitOperations {
    fn last_commit_message(&self) -> String {
        self.message_queries.fetch_add(1, Ordering::SeqCst);
        self.commit_message.clone()
    }

    fn has_staged_changes(&self) -> bool {
        self.staged_queries.fetch_add(1, Ordering::SeqCst);
        !self.staged_files.is_empty()
    }
}

#[derive(Debug, Clone)]
enum MockEntry {
    Modified(DateTime<Utc>),
    Unreadable(String),
}

/// Mock implementation of rule-file metadata lookups.
///
/// Paths not registered with the mock do not exist.
///
/// # Example
///
/// ```rust,ignore
/// let fs = MockFileSystem::new()
///     .with_file(".clinerules/05-security.md", now - Duration::days(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: HashMap<PathBuf, MockEntry>,
}

impl MockFileSystem {
    /// Create a new empty mock file system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file last modified at `modified`.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, modified: DateTime<Utc>) -> Self {
        self.entries
            .insert(path.as_ref().to_path_buf(), MockEntry::Modified(modified));
        self
    }

    /// Add a file whose metadata cannot be read.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl AsRef<Path>, reason: &str) -> Self {
        self.entries.insert(
            path.as_ref().to_path_buf(),
            MockEntry::Unreadable(reason.to_string()),
        );
        self
    }
}

impl RuleFileSystem for MockFileSystem {
    fn modified(&self, path: &Path) -> Result<Option<DateTime<Utc>>> {
        match self.entries.get(path) {
            None => Ok(None),
            Some(MockEntry::Modified(at)) => Ok(Some(*at)),
            Some(MockEntry::Unreadable(reason)) => Err(GateError::Metadata {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, reason.clone()),
            }),
        }
    }
}
