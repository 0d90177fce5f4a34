//! YAML parsing for Traefik file-provider configuration.
//!
//! Documents are kept as an untyped `serde_yaml::Value` tree; the
//! [`document`] views give typed, non-panicking access to the parts the
//! validator reasons about. Key positions are recovered from the raw source
//! for positional output formats.

pub mod document;

pub use document::{
    Document, EntryPoints, ProtocolSection, RouterView, RoutersView, SectionShape, ServiceRef,
    classify_section, is_internal_service, is_truthy, key_text, keys_subset_of,
    references_non_internal_service,
};

use serde_yaml::Value;

/// Error type for parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("YAML parse error: {0}")]
    YamlError(String),
}

/// Position in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Parse a YAML string into a configuration document.
///
/// Empty (or comment-only) content yields `Value::Null`. Merge keys
/// (`<<: *anchor`) are resolved, so routers may share fragments.
pub fn parse_document(content: &str) -> Result<Value, ParseError> {
    if content.lines().all(|l| {
        let t = l.trim();
        t.is_empty() || t.starts_with('#') || t == "---"
    }) {
        return Ok(Value::Null);
    }

    let mut document: Value =
        serde_yaml::from_str(content).map_err(|e| ParseError::YamlError(e.to_string()))?;
    document
        .apply_merge()
        .map_err(|e| ParseError::YamlError(e.to_string()))?;

    Ok(document)
}

/// Find the position of a key path in the source YAML.
///
/// Only block-style mappings are tracked: each path element must be a direct
/// child of the previous one. Flow-style nodes (`{...}`) are not descended
/// into and yield `None`.
pub fn find_position_for_key(source: &str, path: &[&str]) -> Option<Position> {
    if path.is_empty() {
        return Some(Position::default());
    }

    let mut depth = 0;
    let mut parent_indent: Option<usize> = None;
    let mut child_indent: Option<usize> = None;

    for (line_num, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed == "---" {
            continue;
        }

        let indent = line.len() - line.trim_start().len();

        // Left the parent's block without finding the key
        if let Some(parent) = parent_indent
            && indent <= parent
        {
            return None;
        }

        let level = *child_indent.get_or_insert(indent);
        if indent != level {
            continue;
        }

        if key_of_line(trimmed) == Some(path[depth]) {
            depth += 1;
            if depth == path.len() {
                return Some(Position::new(line_num as u32 + 1, indent as u32 + 1));
            }
            parent_indent = Some(indent);
            child_indent = None;
        }
    }

    None
}

/// Find the 1-indexed line of a key path in the source YAML.
pub fn find_line_for_key(source: &str, path: &[&str]) -> Option<u32> {
    find_position_for_key(source, path).map(|p| p.line)
}

/// Extract the mapping key from a trimmed block-mapping line.
fn key_of_line(trimmed: &str) -> Option<&str> {
    let first = trimmed.chars().next()?;
    if first == '"' || first == '\'' {
        let rest = &trimmed[1..];
        let end = rest.find(first)?;
        let after = rest[end + 1..].trim_start();
        return after.starts_with(':').then(|| &rest[..end]);
    }

    let colon = trimmed
        .find(": ")
        .or_else(|| trimmed.strip_suffix(':').map(str::len))?;
    Some(trimmed[..colon].trim_end())
}
