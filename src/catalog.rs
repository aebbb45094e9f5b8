//! Rule categories and the built-in catalog.
//!
//! A catalog is an ordered list of [`RuleCategory`] values. Order only
//! affects how the report is laid out, never the verdict.

use serde::{Deserialize, Serialize};

/// A named group of rule files that must exist and be recently reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCategory {
    /// Heading printed above the category's results (e.g. "Security").
    pub name: String,
    /// Rule file paths relative to the rules directory, checked in order.
    pub files: Vec<String>,
}

impl RuleCategory {
    /// Create a category from a name and its required files.
    #[must_use]
    pub fn new<S: Into<String>>(name: impl Into<String>, files: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

/// Built-in catalog: (category, required files), in report order.
///
/// `10-angular-structure.md` is required by two categories and is checked
/// once per category.
pub const DEFAULT_CATALOG: &[(&str, &[&str])] = &[
    (
        "Architecture",
        &[
            "01-clean-code.md",
            "14-dotnet-backend.md",
            "10-angular-structure.md",
            "03-adr.md",
        ],
    ),
    ("Security", &["13-supabase-jwt.md", "05-security.md"]),
    ("Code Quality", &["02-naming.md", "06-tool-usage.md"]),
    ("Testing", &["04-testing.md"]),
    (
        "UI/UX",
        &[
            "10-angular-structure.md",
            "12-material-animations.md",
            "11-tailwind.md",
            "15-ui-ux-excellence.md",
        ],
    ),
];

/// Build the default catalog as owned categories.
#[must_use]
pub fn default_catalog() -> Vec<RuleCategory> {
    DEFAULT_CATALOG
        .iter()
        .map(|(name, files)| RuleCategory::new(*name, files.iter().copied()))
        .collect()
}
