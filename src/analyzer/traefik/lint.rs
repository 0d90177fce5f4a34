//! Validation entry points.
//!
//! [`validate`] is the pure contract: a document in, ordered messages out.
//! The `lint_*` functions add parsing, positions, and configuration filters
//! and record per-file outcomes in a [`LintResult`].

use std::fmt;
use std::path::Path;

use log::debug;
use serde_yaml::Value;

use crate::analyzer::traefik::config::TraefikLintConfig;
use crate::analyzer::traefik::parser::{Document, parse_document};
use crate::analyzer::traefik::rules::{LintContext, run_rules};
use crate::analyzer::traefik::types::{CheckFailure, Severity};

/// Outcome of processing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// All checks passed.
    Valid,
    /// The document is empty.
    Empty,
    /// The document has no Traefik keys and was not validated.
    NotTraefik,
    /// The path matched an exclude pattern.
    Skipped,
    /// Validation errors were found.
    Invalid,
    /// Validation errors were found and the file was auto-corrected.
    Corrected,
    /// The external YAML linter rejected the file or could not run.
    LintFailed,
    /// The file could not be read.
    ReadFailed,
    /// The file is not valid YAML.
    ParseFailed,
    /// Writing the corrected document failed.
    CorrectionFailed,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Empty => "empty",
            Self::NotTraefik => "not-traefik",
            Self::Skipped => "skipped",
            Self::Invalid => "invalid",
            Self::Corrected => "corrected",
            Self::LintFailed => "lint-failed",
            Self::ReadFailed => "read-failed",
            Self::ParseFailed => "parse-failed",
            Self::CorrectionFailed => "correction-failed",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of validating one configuration file.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// The file path that was validated.
    pub file_path: String,
    pub status: FileStatus,
    /// Rule violations found, in validator order.
    pub failures: Vec<CheckFailure>,
    /// Violations left after auto-correction.
    pub remaining_failures: Vec<CheckFailure>,
    /// Read, parse, or write faults (if any).
    pub parse_errors: Vec<String>,
    /// Diagnostics of the external YAML linter, when it failed.
    pub lint_output: Option<String>,
    /// Corrections applied by the auto-corrector.
    pub corrections: Vec<String>,
    /// Corrected YAML that was not written (dry run).
    pub corrected_content: Option<String>,
    pub error_count: usize,
    pub warning_count: usize,
    pub fixable_count: usize,
}

impl LintResult {
    /// Create a new empty result.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            status: FileStatus::Valid,
            failures: Vec::new(),
            remaining_failures: Vec::new(),
            parse_errors: Vec::new(),
            lint_output: None,
            corrections: Vec::new(),
            corrected_content: None,
            error_count: 0,
            warning_count: 0,
            fixable_count: 0,
        }
    }

    pub fn with_status(mut self, status: FileStatus) -> Self {
        self.status = status;
        self
    }

    /// Update counts based on failures.
    pub fn update_counts(&mut self) {
        self.error_count = self
            .failures
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        self.warning_count = self
            .failures
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count();
        self.fixable_count = self.failures.iter().filter(|f| f.fixable).count();
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn has_remaining_errors(&self) -> bool {
        self.remaining_failures
            .iter()
            .any(|f| f.severity == Severity::Error)
    }

    /// Whether this file counts as passing for the exit code.
    ///
    /// Corrected files pass unless `strict` is set and errors remain.
    pub fn passed(&self, strict: bool) -> bool {
        match self.status {
            FileStatus::Valid | FileStatus::Empty | FileStatus::NotTraefik | FileStatus::Skipped => {
                true
            }
            FileStatus::Corrected => !(strict && self.has_remaining_errors()),
            FileStatus::Invalid
            | FileStatus::LintFailed
            | FileStatus::ReadFailed
            | FileStatus::ParseFailed
            | FileStatus::CorrectionFailed => false,
        }
    }

    /// The validator messages, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.message.as_str()).collect()
    }
}

/// Validate a configuration document.
///
/// Returns every structural and reference error in a fixed order. An empty
/// list means the document is valid, or is empty or not a mapping at all. A
/// non-empty mapping without any of `http`, `tcp`, `udp` or `entryPoints` is
/// reported as missing Traefik configuration.
pub fn validate(document: &Value) -> Vec<String> {
    check_document(document, None)
        .into_iter()
        .map(|f| f.message)
        .collect()
}

/// Validate a document, returning structured failures.
///
/// With `source`, failures carry the line/column of the offending key.
pub fn check_document(document: &Value, source: Option<&str>) -> Vec<CheckFailure> {
    let ctx = LintContext::new(source, "<inline>");
    run_rules(document, &ctx)
}

/// Apply rule levels from `config`, keeping validator order.
pub fn apply_config(failures: Vec<CheckFailure>, config: &TraefikLintConfig) -> Vec<CheckFailure> {
    failures
        .into_iter()
        .filter(|f| !config.is_rule_ignored(&f.code))
        .map(|mut f| {
            f.severity = config.effective_severity(&f.code, f.severity);
            f
        })
        .collect()
}

/// Validate YAML content.
pub fn lint(content: &str, config: &TraefikLintConfig) -> LintResult {
    lint_with_path(content, "<inline>", config)
}

/// Validate YAML content with a path for messages.
pub fn lint_with_path(content: &str, path: &str, config: &TraefikLintConfig) -> LintResult {
    let mut result = LintResult::new(path);

    let document = match parse_document(content) {
        Ok(document) => document,
        Err(err) => {
            result.parse_errors.push(err.to_string());
            return result.with_status(FileStatus::ParseFailed);
        }
    };

    let view = Document::new(&document);
    if view.is_empty() {
        debug!("{}: empty document", path);
        return result.with_status(FileStatus::Empty);
    }
    if !view.is_traefik() {
        debug!("{}: no Traefik sections, skipping validation", path);
        return result.with_status(FileStatus::NotTraefik);
    }

    let ctx = LintContext::new(Some(content), path);
    result.failures = apply_config(run_rules(&document, &ctx), config);
    result.update_counts();
    result.status = if result.has_errors() {
        FileStatus::Invalid
    } else {
        FileStatus::Valid
    };

    result
}

/// Validate a file. Read faults are recorded on the result.
pub fn lint_file(path: &Path, config: &TraefikLintConfig) -> LintResult {
    let path_str = path.display().to_string();

    if config.is_excluded(&path_str) {
        return LintResult::new(path_str).with_status(FileStatus::Skipped);
    }

    match std::fs::read_to_string(path) {
        Ok(content) => lint_with_path(&content, &path_str, config),
        Err(err) => {
            let mut result = LintResult::new(path_str).with_status(FileStatus::ReadFailed);
            result
                .parse_errors
                .push(format!("Failed to read file: {}", err));
            result
        }
    }
}
