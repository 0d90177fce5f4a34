//! TRF010: services-required
//!
//! A section whose routers reference a non-internal service needs a
//! non-empty `services` mapping.

use crate::analyzer::traefik::parser::ProtocolSection;
use crate::analyzer::traefik::parser::document::SERVICES_KEY;
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF010",
    name: "services-required",
    severity: Severity::Error,
    category: RuleCategory::Reference,
    description: "Sections whose routers reference services must define them.",
    fixable: false,
};

pub fn check(section: &ProtocolSection, ctx: &LintContext) -> Option<CheckFailure> {
    if !section.references_non_internal_service() || section.has_services() {
        return None;
    }

    let protocol = section.protocol;
    Some(
        RULE.failure(
            format!(
                "Missing or empty 'services' in {} configuration, but at least one router references a non-internal service.",
                protocol.label()
            ),
            ctx.locate(&[protocol.key(), SERVICES_KEY]),
        )
        .with_data("section", protocol.key()),
    )
}

#[cfg(test)]
mod tests {
    use crate::analyzer::traefik::rules::failures_for;

    #[test]
    fn test_violation_missing_services() {
        let yaml = "entryPoints: {web: {}}\nhttp:\n  routers:\n    r1: {service: s1}\n";
        let failures = failures_for("TRF010", yaml);
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            "Missing or empty 'services' in HTTP configuration, but at least one router references a non-internal service."
        );
        // No services key: points at the section.
        assert_eq!(failures[0].line, 2);
    }

    #[test]
    fn test_violation_empty_services() {
        let yaml = "entryPoints: {web: {}}\ntcp:\n  routers:\n    r1: {rule: x, service: s1}\n  services: {}\n";
        let failures = failures_for("TRF010", yaml);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].line, 5);
    }

    #[test]
    fn test_no_violation_internal_only() {
        let yaml = "entryPoints: {web: {}}\nhttp:\n  routers:\n    r1: {rule: x, service: api@internal}\n";
        assert!(failures_for("TRF010", yaml).is_empty());
    }

    #[test]
    fn test_no_violation_no_service_references() {
        let yaml = "entryPoints: {web: {}}\nudp:\n  routers:\n    u1: {}\n";
        assert!(failures_for("TRF010", yaml).is_empty());
    }
}
