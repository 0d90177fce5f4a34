//! TRF011: routers-required
//!
//! `services` without `routers` is only accepted when the section holds
//! nothing but `middlewares` and `services`. The auto-corrector fixes this
//! by adding an empty `routers` mapping.

use crate::analyzer::traefik::parser::document::{MIDDLEWARES_KEY, SERVICES_KEY};
use crate::analyzer::traefik::parser::{ProtocolSection, RoutersView, keys_subset_of};
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF011",
    name: "routers-required",
    severity: Severity::Error,
    category: RuleCategory::Presence,
    description: "Sections defining services alongside other settings must define routers.",
    fixable: true,
};

pub fn check(section: &ProtocolSection, ctx: &LintContext) -> Option<CheckFailure> {
    if !section.has_services()
        || !matches!(section.routers(), RoutersView::Absent)
        || keys_subset_of(section.map, &[MIDDLEWARES_KEY, SERVICES_KEY])
    {
        return None;
    }

    let protocol = section.protocol;
    Some(
        RULE.failure(
            format!(
                "Missing 'routers' in {} configuration, but 'services' are defined.",
                protocol.label()
            ),
            ctx.locate(&[protocol.key()]),
        )
        .with_data("section", protocol.key()),
    )
}
