//! TRF002: require-entrypoints
//!
//! Any protocol section requires a non-empty `entryPoints` mapping. A present
//! but malformed `entryPoints` is reported even without protocol sections.

use crate::analyzer::traefik::parser::Document;
use crate::analyzer::traefik::parser::document::ENTRY_POINTS_KEY;
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF002",
    name: "require-entrypoints",
    severity: Severity::Error,
    category: RuleCategory::Presence,
    description: "entryPoints must be a non-empty mapping when routing sections are present.",
    fixable: false,
};

pub const MESSAGE: &str = "Missing or empty 'entryPoints' configuration.";

pub fn check(document: &Document, ctx: &LintContext) -> Option<CheckFailure> {
    let entry_points = document.entry_points();
    if entry_points.is_valid() {
        return None;
    }

    (document.has_protocol_sections() || document.has_entry_points())
        .then(|| RULE.failure(MESSAGE, ctx.locate(&[ENTRY_POINTS_KEY])))
}
