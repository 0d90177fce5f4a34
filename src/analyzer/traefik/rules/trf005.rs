//! TRF005: router-is-mapping
//!
//! Each router must be a mapping; malformed routers get no further checks.

use crate::analyzer::traefik::parser::RouterView;
use crate::analyzer::traefik::parser::document::ROUTERS_KEY;
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF005",
    name: "router-is-mapping",
    severity: Severity::Error,
    category: RuleCategory::Structure,
    description: "Each router must be a mapping.",
    fixable: false,
};

pub fn check(router: &RouterView, ctx: &LintContext) -> Option<CheckFailure> {
    if router.fields().is_some() {
        return None;
    }

    let protocol = router.protocol();
    Some(
        RULE.failure(
            format!(
                "Router '{}' in {} is not a valid dictionary.",
                router.name,
                protocol.label()
            ),
            ctx.locate(&[protocol.key(), ROUTERS_KEY, router.name.as_str()]),
        )
        .with_data("section", protocol.key())
        .with_data("router", router.name.clone()),
    )
}
