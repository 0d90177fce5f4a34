//! TRF007: udp-router-rule-type
//!
//! UDP routers may omit `rule`, but a present rule must be a string.

use crate::analyzer::traefik::parser::RouterView;
use crate::analyzer::traefik::parser::document::{ROUTERS_KEY, RULE_KEY};
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, Protocol, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF007",
    name: "udp-router-rule-type",
    severity: Severity::Error,
    category: RuleCategory::Structure,
    description: "A rule on a UDP router must be a string.",
    fixable: false,
};

pub fn check(router: &RouterView, ctx: &LintContext) -> Option<CheckFailure> {
    let protocol = router.protocol();
    if protocol != Protocol::Udp {
        return None;
    }

    let rule = router.rule()?;
    if rule.is_string() {
        return None;
    }

    Some(
        RULE.failure(
            format!(
                "Router '{}' in {} has an invalid rule type (must be a string).",
                router.name,
                protocol.label()
            ),
            ctx.locate(&[protocol.key(), ROUTERS_KEY, router.name.as_str(), RULE_KEY]),
        )
        .with_data("section", protocol.key())
        .with_data("router", router.name.clone()),
    )
}
