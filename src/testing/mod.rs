//! Testing infrastructure for rulegate.
//!
//! Test doubles for the [`GitOperations`](crate::git::GitOperations) and
//! [`RuleFileSystem`](crate::fs::RuleFileSystem) seams, so the validator
//! can be driven without a real repository or real file timestamps.
//!
//! # Example
//!
//! ```rust,ignore
//! use rulegate::testing::{MockFileSystem, MockGitOperations};
//!
//! let git = MockGitOperations::new()
//!     .with_staged_files(vec!["src/lib.rs".to_string()]);
//!
//! let fs = MockFileSystem::new()
//!     .with_file(".clinerules/04-testing.md", now);
//! ```

pub mod mocks;

pub use mocks::*;
