//! Gate configuration.
//!
//! Every setting has a built-in default, so a project without a
//! `.rulegate.json` gets the stock catalog, a 30 day review window and the
//! stock commit-message keywords. The file may override any subset of the
//! fields:
//!
//! ```json
//! {
//!   "rulesDir": "docs/rules",
//!   "staleAfterDays": 14,
//!   "categories": [
//!     { "name": "Security", "files": ["05-security.md"] }
//!   ]
//! }
//! ```

use crate::catalog::{default_catalog, RuleCategory};
use crate::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".rulegate.json";

/// Default directory holding the rule files, relative to the project root.
pub const DEFAULT_RULES_DIR: &str = ".clinerules";

/// Default review window in days. A file exactly this old is still fresh.
pub const DEFAULT_STALE_AFTER_DAYS: f64 = 30.0;

/// Default governance document named in the failure banner.
pub const DEFAULT_GOVERNANCE_DOC: &str = "00-development-gate.md";

/// Commit-message terms that count as acknowledging the gate.
pub const DEFAULT_GATE_KEYWORDS: &[&str] = &[
    "checklist",
    "quality-gate",
    "rules",
    "development-gate",
    "compliance",
];

/// Settings that drive a quality gate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateConfig {
    /// Directory containing the rule files, relative to the project root.
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,

    /// Files older than this many days are reported as stale.
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: f64,

    /// Commit-message keywords that suppress the advisory notice.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Governance document pointed at when the gate fails.
    #[serde(default = "default_governance_doc")]
    pub governance_doc: String,

    /// Rule categories, checked and reported in order.
    #[serde(default = "default_catalog")]
    pub categories: Vec<RuleCategory>,
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RULES_DIR)
}

fn default_stale_after_days() -> f64 {
    DEFAULT_STALE_AFTER_DAYS
}

fn default_keywords() -> Vec<String> {
    DEFAULT_GATE_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_governance_doc() -> String {
    DEFAULT_GOVERNANCE_DOC.to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            stale_after_days: default_stale_after_days(),
            keywords: default_keywords(),
            governance_doc: default_governance_doc(),
            categories: default_catalog(),
        }
    }
}

impl GateConfig {
    /// Load configuration from a project directory.
    ///
    /// Falls back to [`GateConfig::default`] when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file's presence cannot be determined, if it
    /// exists but cannot be read, is not valid JSON, or fails
    /// [`GateConfig::validate`].
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = Self::config_path(project_dir);

        let exists = config_path.try_exists().map_err(|e| {
            GateError::config_with_path(format!("failed to stat: {}", e), config_path.clone())
        })?;
        if !exists {
            tracing::debug!("No {} found, using built-in catalog", CONFIG_FILE_NAME);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            GateError::config_with_path(format!("failed to read: {}", e), config_path.clone())
        })?;
        let config: GateConfig = serde_json::from_str(&content).map_err(|e| {
            GateError::config_with_path(format!("failed to parse: {}", e), config_path.clone())
        })?;
        config.validate()?;

        tracing::debug!(
            path = %config_path.display(),
            categories = config.categories.len(),
            "Loaded gate configuration"
        );
        Ok(config)
    }

    /// Ensure `project_dir` names an existing directory.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the directory is missing, so a
    /// mistyped `--project` fails the gate instead of passing it.
    pub fn ensure_project_dir(project_dir: &Path) -> Result<()> {
        if project_dir.is_dir() {
            Ok(())
        } else {
            Err(GateError::config_with_path(
                format!("project directory not found: {}", project_dir.display()),
                project_dir.to_path_buf(),
            ))
        }
    }

    /// Get the config file path for a project
    pub fn config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    /// Path of a rule file relative to the project root.
    pub fn rule_path(&self, file: &str) -> PathBuf {
        self.rules_dir.join(file)
    }

    /// Path of the governance document relative to the project root.
    pub fn governance_path(&self) -> PathBuf {
        self.rules_dir.join(&self.governance_doc)
    }

    /// Check the configuration for values that would make a run meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.stale_after_days.is_finite() || self.stale_after_days < 0.0 {
            return Err(GateError::invalid_config(
                "staleAfterDays",
                format!(
                    "must be a non-negative number of days, got {}",
                    self.stale_after_days
                ),
            ));
        }

        if self.categories.is_empty() {
            return Err(GateError::invalid_config(
                "categories",
                "at least one rule category is required",
            ));
        }

        for (index, keyword) in self.keywords.iter().enumerate() {
            if keyword.trim().is_empty() {
                return Err(GateError::invalid_config(
                    format!("keywords[{}]", index),
                    "must not be empty",
                ));
            }
        }

        for (index, category) in self.categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(GateError::invalid_config(
                    format!("categories[{}].name", index),
                    "must not be empty",
                ));
            }
            if category.files.is_empty() {
                return Err(GateError::invalid_config(
                    format!("categories[{}].files", index),
                    format!("category '{}' lists no rule files", category.name),
                ));
            }
            if category.files.iter().any(|f| f.trim().is_empty()) {
                return Err(GateError::invalid_config(
                    format!("categories[{}].files", index),
                    format!("category '{}' has an empty file name", category.name),
                ));
            }
        }

        Ok(())
    }
}
