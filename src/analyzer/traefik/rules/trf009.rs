//! TRF009: router-service-defined
//!
//! A router's service must be declared in the `services` of the same
//! section. `@internal` services are built in and exempt; a service of the
//! same name in another protocol section does not count.

use crate::analyzer::traefik::parser::document::{ROUTERS_KEY, SERVICE_KEY};
use crate::analyzer::traefik::parser::{RouterView, ServiceRef};
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF009",
    name: "router-service-defined",
    severity: Severity::Error,
    category: RuleCategory::Reference,
    description: "Routers must reference a service defined in the same section.",
    fixable: false,
};

pub fn check(router: &RouterView, ctx: &LintContext) -> Option<CheckFailure> {
    let ServiceRef::Named(service) = router.service() else {
        return None;
    };
    if router.section.service_defined(service) {
        return None;
    }

    let protocol = router.protocol();
    Some(
        RULE.failure(
            format!(
                "Router '{}' in {} references undefined service '{}'.",
                router.name,
                protocol.label(),
                service
            ),
            ctx.locate(&[protocol.key(), ROUTERS_KEY, router.name.as_str(), SERVICE_KEY]),
        )
        .with_data("section", protocol.key())
        .with_data("router", router.name.clone())
        .with_data("service", service),
    )
}
