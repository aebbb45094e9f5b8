//! Console rendering of a gate run.
//!
//! Everything is written to a caller-supplied [`Write`] so the same output
//! can go to stdout or be captured in tests. Colors are cosmetic: red for
//! failures, green for success, yellow for warnings, blue for headings.

use crate::config::GateConfig;
use crate::validator::Violation;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Hints printed under a failed verdict.
pub const REMEDIATION_HINTS: &[&str] = &[
    "Ensure all rule files exist",
    "Review rules modified recently",
    "Mention \"Quality Gate\" in commit message",
];

/// Example commit message shown in the keyword advisory.
pub const ADVISORY_EXAMPLE: &str = "feat: add training component (Quality Gate: Reviewed)";

pub fn title<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}\n",
        "🚪 Development Quality Gate - Validating Rules".blue()
    )?;
    writeln!(out, "📋 Validating rule categories...\n")
}

/// Render one category: its heading, then a success line or one line per
/// violation.
pub fn category<W: Write>(out: &mut W, name: &str, violations: &[Violation]) -> io::Result<()> {
    writeln!(out, "{}", format!("{}:", name).blue())?;

    if violations.is_empty() {
        writeln!(out, "  {}", "✓ All rules present and recent".green())?;
    } else {
        for violation in violations {
            writeln!(out, "  {}", format!("✗ {}", violation).red())?;
        }
    }

    writeln!(out)
}

pub fn skipped<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}\n",
        "⚠️  No staged changes detected. Skipping other validations.".yellow()
    )?;
    writeln!(out, "{}", "✅ Pre-commit hook setup complete!".green())
}

pub fn advisory<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "⚠️  Warning: Consider mentioning \"Quality Gate\" in commit message".yellow()
    )?;
    writeln!(out, "   Example: \"{}\"\n", ADVISORY_EXAMPLE)
}

pub fn passed<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "✅ Quality Gate PASSED - All rules validated!".green()
    )?;
    writeln!(out, "{}\n", "🚀 You may proceed with your development!".green())
}

/// Render the failure verdict with the violation count, the governance
/// document to consult and the generic remediation hints.
pub fn failed<W: Write>(out: &mut W, total: usize, governance_doc: &Path) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("❌ Quality Gate FAILED - {} violations found!", total).red()
    )?;
    writeln!(
        out,
        "{}\n",
        format!(
            "📖 Please review {} and fix violations",
            governance_doc.display()
        )
        .yellow()
    )?;
    writeln!(out, "{}", "💡 Common fixes:".blue())?;
    for hint in REMEDIATION_HINTS {
        writeln!(out, "   - {}", hint)?;
    }
    Ok(())
}

/// Render the effective catalog and settings.
pub fn catalog<W: Write>(out: &mut W, config: &GateConfig) -> io::Result<()> {
    writeln!(out, "{}", "Quality Gate Catalog".blue().bold())?;
    writeln!(out, "  Rules directory: {}", config.rules_dir.display())?;
    writeln!(out, "  Stale after:     {} days", config.stale_after_days)?;
    writeln!(out, "  Keywords:        {}", config.keywords.join(", "))?;
    writeln!(out, "  Governance doc:  {}", config.governance_path().display())?;

    for category in &config.categories {
        writeln!(out)?;
        writeln!(out, "{}", format!("{}:", category.name).blue())?;
        for file in &category.files {
            writeln!(out, "  - {}", file)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ViolationKind;
    use std::path::PathBuf;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_category_without_violations() {
        let output = render(|out| category(out, "Security", &[]));
        assert!(output.contains("Security:"));
        assert!(output.contains("✓ All rules present and recent"));
    }

    #[test]
    fn test_category_lists_each_violation() {
        let violations = vec![
            Violation {
                category: "Testing".to_string(),
                file: "04-testing.md".to_string(),
                path: PathBuf::from(".clinerules/04-testing.md"),
                kind: ViolationKind::Missing,
            },
            Violation {
                category: "Testing".to_string(),
                file: "07-e2e.md".to_string(),
                path: PathBuf::from(".clinerules/07-e2e.md"),
                kind: ViolationKind::Stale { days: 45 },
            },
        ];
        let output = render(|out| category(out, "Testing", &violations));

        assert!(output.contains("✗ Missing rule file: .clinerules/04-testing.md"));
        assert!(output.contains("✗ Rule 07-e2e.md hasn't been reviewed in 45 days"));
        assert!(!output.contains("All rules present"));
    }

    #[test]
    fn test_failed_banner() {
        let output =
            render(|out| failed(out, 3, Path::new(".clinerules/00-development-gate.md")));
        assert!(output.contains("Quality Gate FAILED - 3 violations found!"));
        assert!(output.contains("Please review .clinerules/00-development-gate.md"));
        for hint in REMEDIATION_HINTS {
            assert!(output.contains(hint));
        }
    }

    #[test]
    fn test_advisory_includes_example() {
        let output = render(|out| advisory(out));
        assert!(output.contains("Consider mentioning \"Quality Gate\""));
        assert!(output.contains(ADVISORY_EXAMPLE));
    }

    #[test]
    fn test_catalog_lists_categories_in_order() {
        let output = render(|out| catalog(out, &GateConfig::default()));
        let arch = output.find("Architecture:").unwrap();
        let uiux = output.find("UI/UX:").unwrap();
        assert!(arch < uiux);
        assert!(output.contains("01-clean-code.md"));
        assert!(output.contains("30 days"));
    }
}
