//! rulegate - Development Quality Gate
//!
//! A pre-commit gate that checks a catalog of governance rule files exist
//! and were reviewed recently, then passes or blocks the commit.
//!
//! # Architecture
//!
//! - [`catalog`] - Rule categories and the built-in catalog
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Custom error types and handling
//! - [`fs`] - Rule-file modification-time lookups
//! - [`git`] - Staged-changes and commit-message queries
//! - [`hook`] - Pre-commit hook installation
//! - [`report`] - Colorized console report
//! - [`testing`] - Mocks for the git and file-system seams
//! - [`validator`] - Violation collection and the gate verdict
//!
//! # Example
//!
//! ```rust,ignore
//! use rulegate::{GateConfig, GitCli, LocalFileSystem, QualityGateValidator};
//!
//! let project = std::path::Path::new(".");
//! let validator = QualityGateValidator::new(
//!     GateConfig::load(project)?,
//!     GitCli::new(project),
//!     LocalFileSystem::new(project),
//! );
//!
//! let result = validator.run(&mut std::io::stdout())?;
//! std::process::exit(result.exit_code());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fs;
pub mod git;
pub mod hook;
pub mod report;
pub mod testing;
pub mod validator;

// Re-export commonly used types
pub use error::{GateError, Result};

pub use catalog::{default_catalog, RuleCategory, DEFAULT_CATALOG};
pub use config::{GateConfig, CONFIG_FILE_NAME, DEFAULT_GATE_KEYWORDS, DEFAULT_RULES_DIR};
pub use fs::{LocalFileSystem, RuleFileSystem};
pub use git::{GitCli, GitOperations};
pub use hook::{install_pre_commit, HookInstall};
pub use testing::{MockFileSystem, MockGitOperations};
pub use validator::{
    mentions_gate_keyword, Outcome, QualityGateValidator, RunResult, Violation, ViolationKind,
};
