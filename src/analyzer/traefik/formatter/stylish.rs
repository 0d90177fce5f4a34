//! Stylish (colored terminal) output formatter.

use colored::Colorize;

use crate::analyzer::traefik::lint::{FileStatus, LintResult};
use crate::analyzer::traefik::types::{CheckFailure, Severity};

/// Format results in stylish format (colored terminal output).
pub fn format(results: &[LintResult], strict: bool) -> String {
    let mut output = String::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;
    let mut total_fixable = 0;
    let mut total_corrected = 0;

    for result in results {
        let failures = shown_failures(result);
        let has_details = !failures.is_empty()
            || !result.parse_errors.is_empty()
            || result.lint_output.is_some()
            || !result.corrections.is_empty();
        if !has_details {
            continue;
        }

        // File header
        output.push_str(&format!("\n{}\n", result.file_path.underline()));

        if let Some(lint_output) = &result.lint_output {
            for line in lint_output.lines().filter(|l| !l.trim().is_empty()) {
                output.push_str(&format!("  {}  {}  yamllint\n", "error".red(), line.trim()));
            }
            total_errors += 1;
        }

        for err in &result.parse_errors {
            output.push_str(&format!("  {}  {}\n", "error".red(), err));
            total_errors += 1;
        }

        for correction in &result.corrections {
            output.push_str(&format!("  {}  {}\n", "fixed".green(), correction));
        }
        if result.status == FileStatus::Corrected {
            total_corrected += 1;
        }

        for failure in failures {
            let severity_str = match failure.severity {
                Severity::Error => "error".red(),
                Severity::Warning => "warning".yellow(),
            };
            let fixable_str = if failure.fixable { " (fixable)" } else { "" };

            output.push_str(&format!(
                "  {}:{}  {}  {}  {}{}\n",
                failure.line,
                failure.column,
                severity_str,
                failure.message,
                failure.code.as_str().dimmed(),
                fixable_str
            ));

            match failure.severity {
                Severity::Error => total_errors += 1,
                Severity::Warning => total_warnings += 1,
            }
            if failure.fixable {
                total_fixable += 1;
            }
        }
    }

    // Summary
    if total_errors > 0 || total_warnings > 0 {
        output.push('\n');

        let mut parts = Vec::new();
        if total_errors > 0 {
            parts.push(format!(
                "{} {}",
                total_errors,
                if total_errors == 1 { "error" } else { "errors" }
            ));
        }
        if total_warnings > 0 {
            parts.push(format!(
                "{} {}",
                total_warnings,
                if total_warnings == 1 {
                    "warning"
                } else {
                    "warnings"
                }
            ));
        }

        let summary = format!(
            "  {} problem{}",
            parts.join(" and "),
            if total_errors + total_warnings == 1 {
                ""
            } else {
                "s"
            }
        );
        if results.iter().all(|r| r.passed(strict)) {
            output.push_str(&format!("{}\n", summary.yellow().bold()));
        } else {
            output.push_str(&format!("{}\n", summary.red().bold()));
        }

        if total_fixable > 0 {
            output.push_str(&format!(
                "  {} {} potentially fixable with --auto-correct\n",
                total_fixable,
                if total_fixable == 1 { "is" } else { "are" }
            ));
        }
    }

    if total_corrected > 0 {
        output.push_str(&format!(
            "  {} file{} auto-corrected\n",
            total_corrected,
            if total_corrected == 1 { "" } else { "s" }
        ));
    }

    output
}

/// After correction only the remaining failures are of interest.
fn shown_failures(result: &LintResult) -> &[CheckFailure] {
    if result.status == FileStatus::Corrected {
        &result.remaining_failures
    } else {
        &result.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::traefik::types::RuleCategory;

    #[test]
    fn test_stylish_format() {
        let mut result = LintResult::new("dynamic.yml").with_status(FileStatus::Invalid);
        result.failures.push(CheckFailure::new(
            "TRF006",
            "router-rule-required",
            Severity::Error,
            RuleCategory::Structure,
            "Router 'r1' in HTTP has a missing, empty, or invalid rule.",
            4,
            5,
        ));
        result.update_counts();

        let output = format(&[result], false);
        assert!(output.contains("dynamic.yml"));
        assert!(output.contains("4:5"));
        assert!(output.contains("TRF006"));
        assert!(output.contains("1 error"));
    }

    #[test]
    fn test_stylish_format_multiple() {
        let mut result = LintResult::new("dynamic.yml").with_status(FileStatus::Invalid);
        result.failures.push(CheckFailure::new(
            "TRF009",
            "router-service-defined",
            Severity::Warning,
            RuleCategory::Reference,
            "Warning 1",
            5,
            1,
        ));
        result.failures.push(
            CheckFailure::new(
                "TRF011",
                "routers-required",
                Severity::Error,
                RuleCategory::Structure,
                "Error 1",
                2,
                1,
            )
            .with_fixable(true),
        );

        let output = format(&[result], false);
        assert!(output.contains("1 error and 1 warning"));
        assert!(output.contains("2 problems"));
        assert!(output.contains("fixable with --auto-correct"));
    }

    #[test]
    fn test_stylish_corrected_shows_remaining() {
        let mut result = LintResult::new("dynamic.yml").with_status(FileStatus::Corrected);
        result.failures.push(CheckFailure::new(
            "TRF011",
            "routers-required",
            Severity::Error,
            RuleCategory::Structure,
            "Original error",
            2,
            1,
        ));
        result
            .corrections
            .push("Added empty 'routers' to HTTP configuration".to_string());

        let output = format(&[result], false);
        assert!(output.contains("Added empty 'routers'"));
        assert!(!output.contains("Original error"));
        assert!(output.contains("1 file auto-corrected"));
    }

    #[test]
    fn test_stylish_format_empty() {
        let result = LintResult::new("dynamic.yml");
        assert!(format(&[result], false).is_empty());
    }
}
