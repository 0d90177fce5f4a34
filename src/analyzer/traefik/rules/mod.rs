//! Rule system for the Traefik validator.
//!
//! Each check lives in its own `trfNNN` module exposing a `RULE` definition
//! and a `check` function for the stage it runs at:
//! - document stage: `trf001`, `trf002`
//! - section stage: `trf003`, `trf004`, then (after routers) `trf010`, `trf011`
//! - router stage: `trf005` .. `trf009`
//!
//! [`run_rules`] walks the document in a fixed order (sections `http`, `tcp`,
//! `udp`; routers in document order) and returns failures in emission order.

use serde_yaml::Value;

use crate::analyzer::traefik::parser::{
    Document, Position, SectionShape, classify_section, find_position_for_key,
};
use crate::analyzer::traefik::types::{CheckFailure, Protocol, RuleCategory, RuleCode, Severity};

pub mod trf001;
pub mod trf002;
pub mod trf003;
pub mod trf004;
pub mod trf005;
pub mod trf006;
pub mod trf007;
pub mod trf008;
pub mod trf009;
pub mod trf010;
pub mod trf011;

/// Static definition of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDef {
    /// Stable code (e.g., "TRF006").
    pub code: &'static str,
    /// Human-readable name (e.g., "router-rule-required").
    pub name: &'static str,
    pub severity: Severity,
    pub category: RuleCategory,
    pub description: &'static str,
    /// Whether the auto-corrector resolves this issue.
    pub fixable: bool,
}

impl RuleDef {
    pub fn rule_code(&self) -> RuleCode {
        RuleCode::new(self.code)
    }

    /// Build a failure for this rule at `position`.
    pub fn failure(&self, message: impl Into<String>, position: Position) -> CheckFailure {
        CheckFailure::new(
            self.code,
            self.name,
            self.severity,
            self.category,
            message,
            position.line,
            position.column,
        )
        .with_fixable(self.fixable)
    }

    /// Whether `key` names this rule by code or by name.
    pub fn matches(&self, key: &str) -> bool {
        self.code.eq_ignore_ascii_case(key) || self.name == key
    }
}

/// All rules, in the order the engine evaluates them within a section.
pub fn all_rules() -> Vec<&'static RuleDef> {
    vec![
        &trf001::RULE,
        &trf002::RULE,
        &trf003::RULE,
        &trf004::RULE,
        &trf005::RULE,
        &trf006::RULE,
        &trf007::RULE,
        &trf008::RULE,
        &trf009::RULE,
        &trf010::RULE,
        &trf011::RULE,
    ]
}

/// Look up a rule by code or name.
pub fn find_rule(key: &str) -> Option<&'static RuleDef> {
    all_rules().into_iter().find(|r| r.matches(key))
}

/// Context shared by all checks of one document.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    /// Raw source, when available, for positions.
    pub source: Option<&'a str>,
    /// The file path (for messages and data).
    pub path: &'a str,
}

impl<'a> LintContext<'a> {
    pub fn new(source: Option<&'a str>, path: &'a str) -> Self {
        Self { source, path }
    }

    /// Position of the deepest existing prefix of `path`, or 1:1.
    pub fn locate(&self, path: &[&str]) -> Position {
        let Some(source) = self.source else {
            return Position::default();
        };
        (1..=path.len())
            .rev()
            .find_map(|n| find_position_for_key(source, &path[..n]))
            .unwrap_or_default()
    }
}

/// Run every rule against a document and collect failures in order.
pub fn run_rules(value: &Value, ctx: &LintContext) -> Vec<CheckFailure> {
    let document = Document::new(value);
    let mut failures = Vec::new();

    if document.is_empty() {
        return failures;
    }

    if let Some(failure) = trf001::check(&document, ctx) {
        failures.push(failure);
        return failures;
    }
    failures.extend(trf002::check(&document, ctx));

    for (protocol, section) in document.sections() {
        check_section(protocol, section, ctx, &mut failures);
    }

    failures
}

fn check_section(
    protocol: Protocol,
    value: &Value,
    ctx: &LintContext,
    failures: &mut Vec<CheckFailure>,
) {
    let section = match classify_section(protocol, value) {
        SectionShape::NotMapping => {
            failures.push(trf003::check(protocol, ctx));
            return;
        }
        SectionShape::MiddlewareOnly => return,
        SectionShape::Routable(section) => section,
    };

    if let Some(failure) = trf004::check(&section, ctx) {
        failures.push(failure);
    } else {
        for router in section.routers_iter() {
            if let Some(failure) = trf005::check(&router, ctx) {
                failures.push(failure);
                continue;
            }
            failures.extend(trf006::check(&router, ctx));
            failures.extend(trf007::check(&router, ctx));
            failures.extend(trf008::check(&router, ctx));
            failures.extend(trf009::check(&router, ctx));
        }
    }

    failures.extend(trf010::check(&section, ctx));
    failures.extend(trf011::check(&section, ctx));
}

/// Run the engine over `yaml` and keep only failures of rule `code`.
#[cfg(test)]
pub(crate) fn failures_for(code: &str, yaml: &str) -> Vec<CheckFailure> {
    let value: Value = serde_yaml::from_str(yaml).unwrap();
    let ctx = LintContext::new(Some(yaml), "traefik.yml");
    run_rules(&value, &ctx)
        .into_iter()
        .filter(|f| f.code.as_str() == code)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(yaml: &str) -> Vec<String> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        run_rules(&value, &LintContext::new(Some(yaml), "traefik.yml"))
            .into_iter()
            .map(|f| f.message)
            .collect()
    }

    #[test]
    fn test_all_rules_unique() {
        let rules = all_rules();
        assert_eq!(rules.len(), 11);
        for (i, rule) in rules.iter().enumerate() {
            assert_eq!(rule.rule_code().number(), Some(i as u32 + 1));
            assert!(rules.iter().filter(|r| r.name == rule.name).count() == 1);
        }
    }

    #[test]
    fn test_find_rule() {
        assert_eq!(find_rule("TRF009").map(|r| r.name), Some("router-service-defined"));
        assert_eq!(find_rule("trf009").map(|r| r.code), Some("TRF009"));
        assert_eq!(find_rule("routers-required").map(|r| r.code), Some("TRF011"));
        assert!(find_rule("DCL001").is_none());
    }

    #[test]
    fn test_locate_falls_back_to_parent() {
        let yaml = "http:\n  routers:\n    r1:\n      service: s1\n";
        let ctx = LintContext::new(Some(yaml), "t.yml");
        assert_eq!(
            ctx.locate(&["http", "routers", "r1", "rule"]),
            Position::new(3, 5)
        );
        assert_eq!(ctx.locate(&["udp"]), Position::default());
        let no_source = LintContext::new(None, "t.yml");
        assert_eq!(no_source.locate(&["http"]), Position::default());
    }

    #[test]
    fn test_order_within_and_across_sections() {
        let yaml = r#"
entryPoints:
  web:
    address: ":80"
udp:
  routers:
    u1:
      rule: 5
http:
  routers:
    b:
      service: missing
    a: nope
tcp: oops
"#;
        assert_eq!(
            messages(yaml),
            vec![
                "Router 'b' in HTTP has a missing, empty, or invalid rule.",
                "Router 'b' in HTTP references undefined service 'missing'.",
                "Router 'a' in HTTP is not a valid dictionary.",
                "Missing or empty 'services' in HTTP configuration, but at least one router references a non-internal service.",
                "Section 'tcp' is not a valid dictionary.",
                "Router 'u1' in UDP has an invalid rule type (must be a string).",
            ]
        );
    }

    #[test]
    fn test_routers_invalid_does_not_stop_siblings() {
        let yaml = r#"
entryPoints: {web: {}}
http:
  routers: nope
tcp:
  routers:
    t1: {service: s}
  services:
    s: {}
"#;
        assert_eq!(
            messages(yaml),
            vec![
                "'routers' in section 'http' is not a valid dictionary.",
                "Router 't1' in TCP has a missing, empty, or invalid rule.",
            ]
        );
    }

    #[test]
    fn test_empty_and_non_mapping_documents() {
        assert!(run_rules(&Value::Null, &LintContext::new(None, "x")).is_empty());
        assert!(messages("{}").is_empty());
        assert!(messages("[http, tcp]").is_empty());
        assert!(messages("just a string").is_empty());
    }
}
