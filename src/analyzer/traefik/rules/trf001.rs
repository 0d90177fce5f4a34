//! TRF001: traefik-config-present
//!
//! A non-empty document must carry at least one of `http`, `tcp`, `udp`, or
//! `entryPoints`. A document whose only Traefik key is an empty
//! `entryPoints` is treated the same way: there is nothing to validate.

use crate::analyzer::traefik::parser::{Document, EntryPoints, Position};
use crate::analyzer::traefik::rules::{LintContext, RuleDef};
use crate::analyzer::traefik::types::{CheckFailure, RuleCategory, Severity};

pub const RULE: RuleDef = RuleDef {
    code: "TRF001",
    name: "traefik-config-present",
    severity: Severity::Error,
    category: RuleCategory::Presence,
    description: "The file must contain http, tcp, udp, or entryPoints configuration.",
    fixable: false,
};

pub const MESSAGE: &str =
    "No Traefik configuration found (missing http, tcp, udp, or entryPoints sections)";

pub fn check(document: &Document, _ctx: &LintContext) -> Option<CheckFailure> {
    let only_empty_entry_points = !document.has_protocol_sections()
        && document.entry_points() == EntryPoints::Empty;

    (!document.is_traefik() || only_empty_entry_points)
        .then(|| RULE.failure(MESSAGE, Position::default()))
}
