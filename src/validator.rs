//! Quality gate validation.
//!
//! The [`QualityGateValidator`] checks every rule file in the catalog,
//! reports what it found, and then decides whether the commit may proceed.
//!
//! Violations are always collected in full. Only afterwards does the gate
//! look at the index: with nothing staged the run passes regardless, so a
//! hook installation dry-run still shows every problem without blocking.
//!
//! # Example
//!
//! ```rust,ignore
//! use rulegate::{GateConfig, GitCli, LocalFileSystem, QualityGateValidator};
//!
//! let validator = QualityGateValidator::new(
//!     GateConfig::load(project)?,
//!     GitCli::new(project),
//!     LocalFileSystem::new(project),
//! );
//! let result = validator.run(&mut std::io::stdout())?;
//! std::process::exit(result.exit_code());
//! ```

use crate::catalog::RuleCategory;
use crate::config::GateConfig;
use crate::error::Result;
use crate::fs::RuleFileSystem;
use crate::git::GitOperations;
use crate::report;
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

// ============================================================================
// Violations
// ============================================================================

/// Why a rule file failed the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The file does not exist.
    Missing,
    /// The file was last modified `days` whole days ago, beyond the window.
    Stale { days: u64 },
}

/// A single shortfall found while checking a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Category the file was checked under.
    pub category: String,
    /// File name as listed in the catalog.
    pub file: String,
    /// Path relative to the project root.
    pub path: PathBuf,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "Missing rule file: {}", self.path.display()),
            ViolationKind::Stale { days } => {
                write!(f, "Rule {} hasn't been reviewed in {} days", self.file, days)
            }
        }
    }
}

// ============================================================================
// Run Result
// ============================================================================

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing staged: enforcement skipped, the run passes.
    Skipped,
    /// Staged changes and no violations. `advisory` is set when the commit
    /// message did not mention the gate.
    Passed { advisory: bool },
    /// Staged changes with at least one violation.
    Failed,
}

/// Result of a full gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Every violation found, in catalog order.
    pub violations: Vec<Violation>,
    pub total_violations: usize,
    pub passed: bool,
    pub outcome: Outcome,
}

impl RunResult {
    fn new(violations: Vec<Violation>, outcome: Outcome) -> Self {
        Self {
            total_violations: violations.len(),
            passed: !matches!(outcome, Outcome::Failed),
            violations,
            outcome,
        }
    }

    /// Process exit code: 0 when the gate passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

/// Whether `message` contains any of `keywords`, ignoring case.
#[must_use]
pub fn mentions_gate_keyword(message: &str, keywords: &[String]) -> bool {
    let message = message.to_lowercase();
    keywords
        .iter()
        .any(|keyword| message.contains(&keyword.to_lowercase()))
}

// ============================================================================
// Quality Gate Validator
// ============================================================================

/// Checks rule files and renders the gate verdict.
pub struct QualityGateValidator<G, F> {
    config: GateConfig,
    git: G,
    fs: F,
    now: Option<DateTime<Utc>>,
}

impl<G: GitOperations, F: RuleFileSystem> QualityGateValidator<G, F> {
    /// Create a validator over the given configuration and seams.
    pub fn new(config: GateConfig, git: G, fs: F) -> Self {
        Self {
            config,
            git,
            fs,
            now: None,
        }
    }

    /// Pin the current time instead of reading the clock at run start.
    #[must_use]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    /// Check every file of `category`, in listed order.
    ///
    /// A missing file yields a [`ViolationKind::Missing`] violation and is
    /// not checked for staleness. An existing file yields a
    /// [`ViolationKind::Stale`] violation when its age in fractional days
    /// is strictly greater than the configured window.
    ///
    /// # Errors
    ///
    /// Returns an error if a file's metadata exists but cannot be read.
    pub fn validate_category(
        &self,
        category: &RuleCategory,
        now: DateTime<Utc>,
    ) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for file in &category.files {
            let path = self.config.rule_path(file);

            let kind = match self.fs.modified(&path)? {
                None => Some(ViolationKind::Missing),
                Some(modified) => {
                    let age_days =
                        now.signed_duration_since(modified).num_milliseconds() as f64
                            / MILLIS_PER_DAY;
                    tracing::debug!(file = %path.display(), age_days, "Checked rule file");

                    (age_days > self.config.stale_after_days).then(|| ViolationKind::Stale {
                        days: age_days.floor() as u64,
                    })
                }
            };

            if let Some(kind) = kind {
                violations.push(Violation {
                    category: category.name.clone(),
                    file: file.clone(),
                    path,
                    kind,
                });
            }
        }

        Ok(violations)
    }

    /// Run the gate, writing the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule file's metadata cannot be read or the
    /// report cannot be written. Git failures never surface here.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunResult> {
        let now = self.now.unwrap_or_else(Utc::now);

        report::title(out)?;

        let mut violations = Vec::new();
        for category in &self.config.categories {
            let found = self.validate_category(category, now)?;
            report::category(out, &category.name, &found)?;
            violations.extend(found);
        }

        if !self.git.has_staged_changes() {
            tracing::info!(
                violations = violations.len(),
                "No staged changes, gate not enforced"
            );
            report::skipped(out)?;
            return Ok(RunResult::new(violations, Outcome::Skipped));
        }

        let message = self.git.last_commit_message();
        let advisory =
            violations.is_empty() && !mentions_gate_keyword(&message, &self.config.keywords);
        if advisory {
            report::advisory(out)?;
        }

        let outcome = if violations.is_empty() {
            report::passed(out)?;
            Outcome::Passed { advisory }
        } else {
            report::failed(out, violations.len(), &self.config.governance_path())?;
            Outcome::Failed
        };

        tracing::info!(violations = violations.len(), ?outcome, "Quality gate finished");
        Ok(RunResult::new(violations, outcome))
    }
}
