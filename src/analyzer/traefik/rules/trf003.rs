//! TRF003: section-is-mapping
//!
//! `http`, `tcp`, and `udp` must be mappings. Nothing else in a malformed
//! section is checked.

use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, Protocol, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF003",
    name: "section-is-mapping",
    severity: Severity::Error,
    category: RuleCategory::Structure,
    description: "Protocol sections (http, tcp, udp) must be mappings.",
    fixable: false,
};

/// Called only for sections already known not to be mappings.
pub fn check(protocol: Protocol, ctx: &LintContext) -> CheckFailure {
    RULE.failure(
        format!("Section '{}' is not a valid dictionary.", protocol.key()),
        ctx.locate(&[protocol.key()]),
    )
    .with_data("section", protocol.key())
}
