//! TRF004: routers-is-mapping
//!
//! A section's `routers` entry, when present, must be a mapping. Per-router
//! checks are skipped for that section only.

use crate::analyzer::traefik::parser::document::ROUTERS_KEY;
use crate::analyzer::traefik::parser::{ProtocolSection, RoutersView};
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF004",
    name: "routers-is-mapping",
    severity: Severity::Error,
    category: RuleCategory::Structure,
    description: "The routers entry of a section must be a mapping.",
    fixable: false,
};

pub fn check(section: &ProtocolSection, ctx: &LintContext) -> Option<CheckFailure> {
    let key = section.protocol.key();
    matches!(section.routers(), RoutersView::Invalid).then(|| {
        RULE.failure(
            format!("'routers' in section '{key}' is not a valid dictionary."),
            ctx.locate(&[key, ROUTERS_KEY]),
        )
        .with_data("section", key)
    })
}

#[cfg(test)]
mod tests {
    use crate::analyzer::traefik::rules::failures_for;

    #[test]
    fn test_violation() {
        let yaml = "entryPoints:\n  web: \":80\"\nhttp:\n  routers: this should be a dict\n";
        let failures = failures_for("TRF004", yaml);
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            "'routers' in section 'http' is not a valid dictionary."
        );
        assert_eq!(failures[0].line, 4);
    }

    #[test]
    fn test_violation_null_routers() {
        let yaml = "entryPoints: {w: {}}\ntcp:\n  routers:\n";
        assert_eq!(failures_for("TRF004", yaml).len(), 1);
    }

    #[test]
    fn test_no_violation_absent_or_mapping() {
        assert!(failures_for("TRF004", "entryPoints: {w: {}}\nhttp: {services: {}}\n").is_empty());
        assert!(failures_for("TRF004", "entryPoints: {w: {}}\nhttp: {routers: {}}\n").is_empty());
    }
}
