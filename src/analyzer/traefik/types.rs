//! Core types for the Traefik configuration validator.
//!
//! - `Severity` - Rule violation severity levels
//! - `RuleCode` - Rule identifiers (e.g., "TRF001")
//! - `CheckFailure` - A single rule violation
//! - `RuleCategory` - Category of the rule (structure, reference, ...)
//! - `Protocol` - The `http` / `tcp` / `udp` protocol sections

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Severity levels for rule violations.
///
/// Only `Error` fails a file; `Warning` is what configuration downgrades to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, never fails the file
    Warning,
    /// Fails the file
    #[default]
    Error,
}

impl Severity {
    /// Parse a severity from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" | "critical" | "major" => Some(Self::Error),
            "warning" | "warn" | "minor" => Some(Self::Warning),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// The document carries the sections Traefik needs
    Presence,
    /// A node has the wrong shape (not a mapping where one is required)
    Structure,
    /// A router/service cross-reference is broken
    Reference,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Presence => "presence",
            Self::Structure => "structure",
            Self::Reference => "reference",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule code identifier (e.g., "TRF001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleCode(pub String);

impl RuleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is one of our TRF rules.
    pub fn is_trf_rule(&self) -> bool {
        self.0.starts_with("TRF")
    }

    /// Get the numeric part of the rule code.
    pub fn number(&self) -> Option<u32> {
        self.0.strip_prefix("TRF").and_then(|n| n.parse().ok())
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RuleCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One of the three routable protocol sections at the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Tcp,
    Udp,
}

impl Protocol {
    /// Fixed iteration order for validation and correction.
    pub const ALL: [Protocol; 3] = [Protocol::Http, Protocol::Tcp, Protocol::Udp];

    /// Key of the section at the document root.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Tcp => "tcp",
            Self::Udp => "udp",
        }
    }

    /// Upper-cased name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Http => "HTTP",
            Self::Tcp => "TCP",
            Self::Udp => "UDP",
        }
    }

    /// Whether routers in this section must carry a non-blank rule.
    pub fn requires_rule(&self) -> bool {
        !matches!(self, Self::Udp)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A check failure (rule violation) found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// The rule code that was violated.
    pub code: RuleCode,
    /// The human-readable rule name (e.g., "router-rule-required").
    pub rule_name: String,
    pub severity: Severity,
    pub category: RuleCategory,
    /// The exact validator message.
    pub message: String,
    /// The line number where the violation occurred (1-indexed).
    pub line: u32,
    /// The column number where the violation starts (1-indexed).
    pub column: u32,
    /// Whether the auto-corrector resolves this issue.
    pub fixable: bool,
    /// Additional context data for the violation.
    pub data: HashMap<String, String>,
}

impl CheckFailure {
    pub fn new(
        code: impl Into<RuleCode>,
        rule_name: impl Into<String>,
        severity: Severity,
        category: RuleCategory,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            code: code.into(),
            rule_name: rule_name.into(),
            severity,
            category,
            message: message.into(),
            line,
            column,
            fixable: false,
            data: HashMap::new(),
        }
    }

    /// Mark as fixable.
    pub fn with_fixable(mut self, fixable: bool) -> Self {
        self.fixable = fixable;
        self
    }

    /// Add context data.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// Configuration level for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigLevel {
    /// Rule is disabled
    Off,
    /// Rule produces warnings
    Warn,
    /// Rule produces errors
    #[default]
    Error,
}

impl ConfigLevel {
    /// Convert to severity (for non-off levels).
    pub fn to_severity(&self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}
