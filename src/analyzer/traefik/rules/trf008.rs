//! TRF008: router-service-name-type
//!
//! A router's `service`, when set, must be a string.

use crate::analyzer::traefik::parser::document::{ROUTERS_KEY, SERVICE_KEY};
use crate::analyzer::traefik::parser::{RouterView, ServiceRef};
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF008",
    name: "router-service-name-type",
    severity: Severity::Error,
    category: RuleCategory::Reference,
    description: "The service of a router must be given by name (a string).",
    fixable: false,
};

pub fn check(router: &RouterView, ctx: &LintContext) -> Option<CheckFailure> {
    let ServiceRef::NotString(_) = router.service() else {
        return None;
    };

    let protocol = router.protocol();
    Some(
        RULE.failure(
            format!(
                "Router '{}' in {} has an invalid service name type.",
                router.name,
                protocol.label()
            ),
            ctx.locate(&[protocol.key(), ROUTERS_KEY, router.name.as_str(), SERVICE_KEY]),
        )
        .with_data("section", protocol.key())
        .with_data("router", router.name.clone()),
    )
}
