//! GitHub Actions output formatter.
//!
//! Produces output in GitHub Actions workflow command format:
//! ::error file={name},line={line},col={col},title={code}::{message}

use crate::analyzer::traefik::lint::{FileStatus, LintResult};
use crate::analyzer::traefik::types::Severity;

/// Format results for GitHub Actions.
pub fn format(results: &[LintResult]) -> String {
    let mut output = String::new();

    for result in results {
        if let Some(lint_output) = &result.lint_output {
            output.push_str(&format!(
                "::error file={},title=yamllint::{}\n",
                result.file_path,
                escape_github(lint_output.trim_end())
            ));
        }

        for err in &result.parse_errors {
            output.push_str(&format!(
                "::error file={}::{}\n",
                result.file_path,
                escape_github(err)
            ));
        }

        for correction in &result.corrections {
            output.push_str(&format!(
                "::notice file={},title=auto-correct::{}\n",
                result.file_path,
                escape_github(correction)
            ));
        }

        let failures = if result.status == FileStatus::Corrected {
            &result.remaining_failures
        } else {
            &result.failures
        };
        for failure in failures {
            let level = match failure.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            output.push_str(&format!(
                "::{} file={},line={},col={},title={}::{}\n",
                level,
                result.file_path,
                failure.line,
                failure.column,
                failure.code,
                escape_github(&failure.message)
            ));
        }
    }

    output
}

/// Escape special characters for GitHub Actions.
fn escape_github(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
