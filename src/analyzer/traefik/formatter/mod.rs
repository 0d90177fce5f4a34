//! Output formatters for validation results.
//!
//! - GitLab - Collapsible CI log sections (default)
//! - Stylish - Colored terminal output
//! - GitHub - GitHub Actions annotations
//! - JSON - Machine-readable JSON output

pub mod github;
pub mod gitlab;
pub mod json;
pub mod stylish;

use crate::analyzer::traefik::lint::LintResult;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    GitLab,
    Stylish,
    GitHub,
    Json,
}

impl OutputFormat {
    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gitlab" | "gitlab-ci" => Some(Self::GitLab),
            "stylish" => Some(Self::Stylish),
            "github" | "github-actions" => Some(Self::GitHub),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitLab => "gitlab",
            Self::Stylish => "stylish",
            Self::GitHub => "github",
            Self::Json => "json",
        }
    }

    /// Whether ANSI colors may be used with this format.
    pub fn supports_color(&self) -> bool {
        !matches!(self, Self::Json)
    }
}

/// Format results according to the specified format.
///
/// `strict` decides whether corrected files with remaining errors count as
/// failures in summaries.
pub fn format_results(results: &[LintResult], format: OutputFormat, strict: bool) -> String {
    match format {
        OutputFormat::GitLab => gitlab::format(results, strict),
        OutputFormat::Stylish => stylish::format(results, strict),
        OutputFormat::GitHub => github::format(results),
        OutputFormat::Json => json::format(results, strict),
    }
}

/// Format a single result.
pub fn format_result(result: &LintResult, format: OutputFormat, strict: bool) -> String {
    format_results(std::slice::from_ref(result), format, strict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::traefik::lint::FileStatus;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("gitlab"), Some(OutputFormat::GitLab));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("stylish"), Some(OutputFormat::Stylish));
        assert_eq!(
            OutputFormat::parse("github-actions"),
            Some(OutputFormat::GitHub)
        );
        assert_eq!(OutputFormat::parse("junit"), None);
        assert_eq!(OutputFormat::default(), OutputFormat::GitLab);
    }

    #[test]
    fn test_format_dispatch() {
        let result = LintResult::new("conf/dynamic.yml").with_status(FileStatus::Valid);
        let json = format_result(&result, OutputFormat::Json, false);
        assert!(json.trim_start().starts_with('['));
        assert!(format_result(&result, OutputFormat::GitLab, false).contains("section_start"));
        assert!(!OutputFormat::Json.supports_color());
    }
}
