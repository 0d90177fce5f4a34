//! TRF006: router-rule-required
//!
//! HTTP and TCP routers need a non-blank string `rule`. The matcher syntax
//! itself is not interpreted.

use crate::analyzer::traefik::parser::RouterView;
use crate::analyzer::traefik::parser::document::{ROUTERS_KEY, RULE_KEY};
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF006",
    name: "router-rule-required",
    severity: Severity::Error,
    category: RuleCategory::Structure,
    description: "HTTP and TCP routers must define a non-empty string rule.",
    fixable: false,
};

pub fn check(router: &RouterView, ctx: &LintContext) -> Option<CheckFailure> {
    let protocol = router.protocol();
    if !protocol.requires_rule() {
        return None;
    }

    let valid = router
        .rule()
        .and_then(|rule| rule.as_str())
        .is_some_and(|rule| !rule.trim().is_empty());
    if valid {
        return None;
    }

    Some(
        RULE.failure(
            format!(
                "Router '{}' in {} has a missing, empty, or invalid rule.",
                router.name,
                protocol.label()
            ),
            ctx.locate(&[protocol.key(), ROUTERS_KEY, router.name.as_str(), RULE_KEY]),
        )
        .with_data("section", protocol.key())
        .with_data("router", router.name.clone()),
    )
}
