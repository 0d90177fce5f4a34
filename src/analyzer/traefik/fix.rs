//! Auto-correction of missing `routers` / `services` containers.
//!
//! Only empty containers are ever inserted. Rules, service bodies and entry
//! points are never fabricated, so those errors survive a correction and are
//! reported again on re-validation.

use std::fmt;
use std::path::Path;

use log::{debug, info};
use serde_yaml::{Mapping, Value};

use crate::analyzer::traefik::parser::document::{MIDDLEWARES_KEY, ROUTERS_KEY, SERVICES_KEY};
use crate::analyzer::traefik::parser::{keys_subset_of, parse_document, references_non_internal_service};
use crate::analyzer::traefik::types::Protocol;
use crate::error::Result;

/// A container inserted by the corrector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    pub protocol: Protocol,
    /// `routers` or `services`.
    pub key: &'static str,
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added empty '{}' to {} configuration", self.key, self.protocol.label())
    }
}

/// Return a corrected copy of `document`.
pub fn correct(document: &Value) -> Value {
    let mut corrected = document.clone();
    correct_in_place(&mut corrected);
    corrected
}

/// Correct `document` in place and report what was inserted.
///
/// Sections that are not mappings, or hold nothing but `middlewares`, are
/// left alone.
pub fn correct_in_place(document: &mut Value) -> Vec<Correction> {
    let mut corrections = Vec::new();
    let Some(root) = document.as_mapping_mut() else {
        return corrections;
    };

    for protocol in Protocol::ALL {
        let Some(section) = root.get_mut(protocol.key()).and_then(Value::as_mapping_mut) else {
            continue;
        };
        if keys_subset_of(section, &[MIDDLEWARES_KEY]) {
            continue;
        }
        correct_section(protocol, section, &mut corrections);
    }

    corrections
}

fn correct_section(protocol: Protocol, section: &mut Mapping, corrections: &mut Vec<Correction>) {
    if section.contains_key(SERVICES_KEY) && !section.contains_key(ROUTERS_KEY) {
        section.insert(Value::from(ROUTERS_KEY), Value::Mapping(Mapping::new()));
        corrections.push(Correction {
            protocol,
            key: ROUTERS_KEY,
        });
    }

    let needs_services = section
        .get(ROUTERS_KEY)
        .and_then(Value::as_mapping)
        .is_some_and(references_non_internal_service);
    if needs_services && !section.contains_key(SERVICES_KEY) {
        section.insert(Value::from(SERVICES_KEY), Value::Mapping(Mapping::new()));
        corrections.push(Correction {
            protocol,
            key: SERVICES_KEY,
        });
    }
}

/// Result of correcting YAML content.
#[derive(Debug, Clone)]
pub struct FixOutcome {
    /// Serialized corrected document.
    pub content: String,
    pub corrections: Vec<Correction>,
}

/// Correct YAML content. Returns `None` when nothing needed fixing.
///
/// Corrected output is re-serialized; comments and formatting of the
/// original are not kept.
pub fn fix_content(content: &str) -> Result<Option<FixOutcome>> {
    let mut document = parse_document(content)?;
    let corrections = correct_in_place(&mut document);
    if corrections.is_empty() {
        return Ok(None);
    }

    let content = serde_yaml::to_string(&document)?;
    Ok(Some(FixOutcome {
        content,
        corrections,
    }))
}

/// Correct a file, writing it back unless `dry_run` is set.
pub fn fix_file(path: &Path, dry_run: bool) -> Result<Option<FixOutcome>> {
    let content = std::fs::read_to_string(path)?;

    let Some(outcome) = fix_content(&content)? else {
        debug!("{}: nothing to correct", path.display());
        return Ok(None);
    };

    if dry_run {
        debug!("{}: dry run, not writing corrections", path.display());
    } else {
        std::fs::write(path, &outcome.content)?;
        info!(
            "{}: applied {} correction(s)",
            path.display(),
            outcome.corrections.len()
        );
    }

    Ok(Some(outcome))
}
