//! Rule-level configuration for the Traefik validator.
//!
//! - Per-rule level (off / warn / error), keyed by rule code or rule name
//! - File exclusion patterns
//! - Strict mode (auto-corrected files with remaining errors still fail)

use std::collections::HashMap;

use log::warn;

use crate::analyzer::traefik::rules::find_rule;
use crate::analyzer::traefik::types::{ConfigLevel, RuleCode, Severity};

/// Main configuration for validation runs.
#[derive(Debug, Clone, Default)]
pub struct TraefikLintConfig {
    /// Per-rule levels, keyed by rule code.
    pub rules: HashMap<String, ConfigLevel>,
    /// File patterns to exclude from validation.
    pub exclude: Vec<String>,
    /// Fail auto-corrected files that still have errors.
    pub strict: bool,
}

impl TraefikLintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclude pattern.
    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Set multiple exclude patterns.
    pub fn with_excludes(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the level of a rule given by code or name. Unknown rules are ignored.
    pub fn with_level(mut self, rule: &str, level: ConfigLevel) -> Self {
        match find_rule(rule) {
            Some(def) => {
                self.rules.insert(def.code.to_string(), level);
            }
            None => warn!("Unknown rule '{}' in configuration, skipping", rule),
        }
        self
    }

    /// Disable a rule.
    pub fn ignore(self, rule: &str) -> Self {
        self.with_level(rule, ConfigLevel::Off)
    }

    /// Downgrade a rule to warnings.
    pub fn warn(self, rule: &str) -> Self {
        self.with_level(rule, ConfigLevel::Warn)
    }

    /// Set a rule to error level.
    pub fn error(self, rule: &str) -> Self {
        self.with_level(rule, ConfigLevel::Error)
    }

    /// Check if a rule is ignored (disabled).
    pub fn is_rule_ignored(&self, code: &RuleCode) -> bool {
        self.rules.get(code.as_str()) == Some(&ConfigLevel::Off)
    }

    /// Get the effective severity for a rule, applying any overrides.
    pub fn effective_severity(&self, code: &RuleCode, default: Severity) -> Severity {
        self.rules
            .get(code.as_str())
            .and_then(|level| level.to_severity())
            .unwrap_or(default)
    }

    /// Check if a file path should be excluded.
    ///
    /// Patterns containing glob characters match the whole path or the file
    /// name; plain patterns match any path containing them.
    pub fn is_excluded(&self, path: &str) -> bool {
        let file_name = std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path);

        self.exclude.iter().any(|pattern| {
            if pattern.contains(['*', '?', '[']) {
                match glob::Pattern::new(pattern) {
                    Ok(glob) => glob.matches(path) || glob.matches(file_name),
                    Err(err) => {
                        warn!("Invalid exclude pattern '{}': {}", pattern, err);
                        false
                    }
                }
            } else {
                path.contains(pattern.as_str())
            }
        })
    }
}

/// Builder for creating a `TraefikLintConfig` from settings lists.
#[derive(Debug, Default)]
pub struct TraefikLintConfigBuilder {
    config: TraefikLintConfig,
}

impl TraefikLintConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for rule in rules {
            self.config = self.config.ignore(rule.as_ref());
        }
        self
    }

    pub fn warn_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for rule in rules {
            self.config = self.config.warn(rule.as_ref());
        }
        self
    }

    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.config = self.config.with_excludes(patterns);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config = self.config.with_strict(strict);
        self
    }

    pub fn build(self) -> TraefikLintConfig {
        self.config
    }
}
