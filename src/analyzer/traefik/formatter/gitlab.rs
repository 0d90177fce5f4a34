//! GitLab CI output formatter.
//!
//! Each file gets a collapsible log section:
//! `\x1b[0Ksection_start:<unix-ts>:<name>\r\x1b[0K<title>` ... `section_end`.
//! Errors are printed bold red, one `  - ` line per message.

use colored::Colorize;

use crate::analyzer::traefik::lint::{FileStatus, LintResult};
use crate::analyzer::traefik::types::{CheckFailure, Severity};

const CLEAR: &str = "\x1b[0K";

/// Format results as a GitLab CI job log.
pub fn format(results: &[LintResult], strict: bool) -> String {
    let mut output = String::new();

    output.push_str(&section(
        "validation_summary",
        &"Starting Traefik Configuration Validation".bold().to_string(),
    ));

    for result in results {
        format_file(&mut output, result);
    }

    let title = if results.iter().all(|r| r.passed(strict)) {
        format!("{}", "✓ All files are valid!".green())
    } else {
        format!("{}", "✗ Some files have validation errors.".red())
    };
    output.push_str(&section("validation_result", &title));

    output
}

/// A collapsed section header and footer.
pub fn section(name: &str, title: &str) -> String {
    let ts = chrono::Utc::now().timestamp();
    format!(
        "\n{CLEAR}section_start:{ts}:{name}\r{CLEAR}{title}\n{CLEAR}section_end:{ts}:{name}\r{CLEAR}\n"
    )
}

/// A bold red error line.
pub fn error_line(message: &str) -> String {
    format!("{CLEAR}{}\n", message.red().bold())
}

/// Section name for a file, based on its file name.
fn section_name(file_path: &str) -> String {
    let base = std::path::Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());
    format!("validate_{}", base)
}

fn format_file(output: &mut String, result: &LintResult) {
    let path = &result.file_path;
    output.push_str(&section(
        &section_name(path),
        &format!("Processing {}...", path),
    ));

    let check = "✓".green();
    match result.status {
        FileStatus::Skipped => {
            output.push_str(&format!(
                "{} {} skipped (matches an exclude pattern)\n",
                "-".yellow(),
                path
            ));
        }
        FileStatus::LintFailed => {
            if let Some(lint_output) = &result.lint_output {
                output.push_str(&error_line(&format!("YAML Lint errors in {}:", path)));
                output.push_str(lint_output.trim_end());
                output.push('\n');
            }
            for err in &result.parse_errors {
                output.push_str(&error_line(err));
            }
        }
        FileStatus::ReadFailed | FileStatus::ParseFailed => {
            for err in &result.parse_errors {
                output.push_str(&error_line(err));
            }
        }
        FileStatus::Empty => {
            output.push_str(&format!("{} {} is valid (empty file)\n", check, path));
        }
        FileStatus::NotTraefik => {
            output.push_str(&format!(
                "{} {} is valid (not a Traefik configuration file)\n",
                check, path
            ));
        }
        FileStatus::Valid => {
            push_warnings(output, path, &result.failures);
            output.push_str(&format!("{} {} is valid\n", check, path));
        }
        FileStatus::Invalid => {
            push_errors(output, path, &result.failures);
            push_warnings(output, path, &result.failures);
        }
        FileStatus::Corrected => {
            push_errors(output, path, &result.failures);
            output.push_str(&format!("\n{}\n", "Attempting to auto-correct...".yellow()));
            for correction in &result.corrections {
                output.push_str(&format!("  + {}\n", correction));
            }
            match &result.corrected_content {
                Some(content) => {
                    output.push_str(&format!(
                        "{}\n{}",
                        "Corrected configuration (dry run, not written):".yellow(),
                        content
                    ));
                }
                None if result.corrections.is_empty() => {
                    output.push_str(&format!(
                        "{}\n",
                        "No automatic corrections available.".yellow()
                    ));
                }
                None => {
                    output.push_str(&format!(
                        "{}\n",
                        "Configuration has been auto-corrected.".green()
                    ));
                }
            }
            let remaining: Vec<&CheckFailure> = result
                .remaining_failures
                .iter()
                .filter(|f| f.severity == Severity::Error)
                .collect();
            if !remaining.is_empty() {
                output.push_str(&error_line(&format!(
                    "Errors remaining in {} after correction:",
                    path
                )));
                for failure in remaining {
                    output.push_str(&error_line(&format!("  - {}", failure.message)));
                }
            }
        }
        FileStatus::CorrectionFailed => {
            push_errors(output, path, &result.failures);
            for err in &result.parse_errors {
                output.push_str(&error_line(err));
            }
        }
    }
}

fn push_errors(output: &mut String, path: &str, failures: &[CheckFailure]) {
    let errors: Vec<&CheckFailure> = failures
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    if errors.is_empty() {
        return;
    }

    output.push_str(&error_line(&format!("Validation errors in {}:", path)));
    for failure in errors {
        output.push_str(&error_line(&format!("  - {}", failure.message)));
    }
}

fn push_warnings(output: &mut String, path: &str, failures: &[CheckFailure]) {
    let warnings: Vec<&CheckFailure> = failures
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .collect();
    if warnings.is_empty() {
        return;
    }

    output.push_str(&format!("{}\n", format!("Warnings in {}:", path).yellow()));
    for failure in warnings {
        output.push_str(&format!("{}\n", format!("  - {}", failure.message).yellow()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::traefik::types::RuleCategory;

    fn failure(code: &str, severity: Severity, message: &str) -> CheckFailure {
        CheckFailure::new(code, "test", severity, RuleCategory::Reference, message, 3, 5)
    }

    #[test]
    fn test_section_markers() {
        let out = section("validate_a.yml", "Processing a.yml...");
        assert!(out.starts_with("\n\x1b[0Ksection_start:"));
        assert!(out.contains(":validate_a.yml\r\x1b[0KProcessing a.yml..."));
        assert!(out.contains("\x1b[0Ksection_end:"));
    }

    #[test]
    fn test_invalid_file() {
        let mut result = LintResult::new("conf/dynamic.yml").with_status(FileStatus::Invalid);
        result.failures.push(failure(
            "TRF009",
            Severity::Error,
            "Router 'r1' in HTTP references undefined service 's1'.",
        ));

        let out = format(&[result], false);
        assert!(out.contains("section_start:") && out.contains(":validate_dynamic.yml\r"));
        assert!(out.contains("Validation errors in conf/dynamic.yml:"));
        assert!(out.contains("  - Router 'r1' in HTTP references undefined service 's1'."));
        assert!(out.contains("Some files have validation errors."));
    }

    #[test]
    fn test_valid_and_non_traefik() {
        let results = [
            LintResult::new("a.yml").with_status(FileStatus::Valid),
            LintResult::new("b.yml").with_status(FileStatus::NotTraefik),
        ];
        let out = format(&results, false);
        assert!(out.contains("a.yml is valid\n"));
        assert!(out.contains("b.yml is valid (not a Traefik configuration file)"));
        assert!(out.contains("All files are valid!"));
    }

    #[test]
    fn test_corrected_file() {
        let mut result = LintResult::new("c.yml").with_status(FileStatus::Corrected);
        result.failures.push(failure("TRF010", Severity::Error, "Missing services"));
        result
            .corrections
            .push("Added empty 'services' to HTTP configuration".to_string());
        result
            .remaining_failures
            .push(failure("TRF010", Severity::Error, "Missing services"));

        let out = format(std::slice::from_ref(&result), false);
        assert!(out.contains("Attempting to auto-correct..."));
        assert!(out.contains("  + Added empty 'services' to HTTP configuration"));
        assert!(out.contains("Configuration has been auto-corrected."));
        assert!(out.contains("Errors remaining in c.yml after correction:"));
        assert!(out.contains("All files are valid!"));

        assert!(format(&[result], true).contains("Some files have validation errors."));
    }

    #[test]
    fn test_lint_failed() {
        let mut result = LintResult::new("d.yml").with_status(FileStatus::LintFailed);
        result.lint_output = Some("d.yml\n  1:1  error  syntax error\n".to_string());
        let out = format(&[result], false);
        assert!(out.contains("YAML Lint errors in d.yml:"));
        assert!(out.contains("1:1  error  syntax error"));
    }
}
