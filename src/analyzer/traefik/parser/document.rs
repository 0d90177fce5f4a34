//! Typed views over an untyped configuration document.
//!
//! Nothing here panics on unexpected shapes: every accessor returns an
//! absence or type-mismatch variant that the rules turn into messages.

use serde_yaml::{Mapping, Value};

use crate::analyzer::traefik::types::Protocol;

pub const ENTRY_POINTS_KEY: &str = "entryPoints";
pub const ROUTERS_KEY: &str = "routers";
pub const SERVICES_KEY: &str = "services";
pub const MIDDLEWARES_KEY: &str = "middlewares";
pub const RULE_KEY: &str = "rule";
pub const SERVICE_KEY: &str = "service";

/// Suffix of Traefik's built-in services (`api@internal`, `ping@internal`, ...).
pub const INTERNAL_SUFFIX: &str = "@internal";

/// YAML truthiness: null, `false`, zero, and empty strings/collections are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

pub fn is_internal_service(name: &str) -> bool {
    name.ends_with(INTERNAL_SUFFIX)
}

/// Render a mapping key for messages.
pub fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Whether every key of `map` is one of `allowed`. An empty mapping qualifies.
pub fn keys_subset_of(map: &Mapping, allowed: &[&str]) -> bool {
    map.keys()
        .all(|k| k.as_str().is_some_and(|k| allowed.contains(&k)))
}

/// Whether any router in `routers` points at a service that must be declared.
pub fn references_non_internal_service(routers: &Mapping) -> bool {
    routers.values().any(|router| {
        router.as_mapping().is_some_and(|fields| {
            matches!(
                ServiceRef::of(fields),
                ServiceRef::Named(_) | ServiceRef::NotString(_)
            )
        })
    })
}

/// The `service` field of a router.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServiceRef<'a> {
    /// Missing, or present but falsy (`null`, `""`, ...).
    Absent,
    /// Truthy but not a string.
    NotString(&'a Value),
    /// A built-in `...@internal` service.
    Internal(&'a str),
    /// A service that must exist in the same section.
    Named(&'a str),
}

impl<'a> ServiceRef<'a> {
    pub fn of(router: &'a Mapping) -> Self {
        match router.get(SERVICE_KEY) {
            Some(value) if is_truthy(value) => match value.as_str() {
                Some(name) if is_internal_service(name) => Self::Internal(name),
                Some(name) => Self::Named(name),
                None => Self::NotString(value),
            },
            _ => Self::Absent,
        }
    }
}

/// State of the root `entryPoints` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoints {
    Missing,
    /// `null` or an empty mapping.
    Empty,
    /// Present but not a mapping.
    Invalid,
    Valid,
}

impl EntryPoints {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Root view of a configuration document.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    root: Option<&'a Mapping>,
}

impl<'a> Document<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            root: value.as_mapping(),
        }
    }

    /// Null, scalar, sequence, or empty-mapping roots carry nothing to check.
    pub fn is_empty(&self) -> bool {
        self.root.is_none_or(Mapping::is_empty)
    }

    fn has_key(&self, key: &str) -> bool {
        self.root.is_some_and(|m| m.contains_key(key))
    }

    /// Any of `http` / `tcp` / `udp` is a root key.
    pub fn has_protocol_sections(&self) -> bool {
        Protocol::ALL.iter().any(|p| self.has_key(p.key()))
    }

    pub fn has_entry_points(&self) -> bool {
        self.has_key(ENTRY_POINTS_KEY)
    }

    /// Carries at least one key Traefik's file provider understands.
    pub fn is_traefik(&self) -> bool {
        self.has_protocol_sections() || self.has_entry_points()
    }

    pub fn entry_points(&self) -> EntryPoints {
        match self.root.and_then(|m| m.get(ENTRY_POINTS_KEY)) {
            None => EntryPoints::Missing,
            Some(Value::Null) => EntryPoints::Empty,
            Some(Value::Mapping(map)) if map.is_empty() => EntryPoints::Empty,
            Some(Value::Mapping(_)) => EntryPoints::Valid,
            Some(_) => EntryPoints::Invalid,
        }
    }

    /// Present protocol sections in fixed `http`, `tcp`, `udp` order.
    pub fn sections(self) -> impl Iterator<Item = (Protocol, &'a Value)> + 'a {
        let root = self.root;
        Protocol::ALL
            .into_iter()
            .filter_map(move |p| root.and_then(|m| m.get(p.key())).map(|v| (p, v)))
    }
}

/// Classification of a protocol section before router/service checks.
#[derive(Debug, Clone, Copy)]
pub enum SectionShape<'a> {
    NotMapping,
    /// Only `middlewares` (or nothing at all): nothing to route.
    MiddlewareOnly,
    Routable(ProtocolSection<'a>),
}

pub fn classify_section(protocol: Protocol, value: &Value) -> SectionShape<'_> {
    match value.as_mapping() {
        None => SectionShape::NotMapping,
        Some(map) if keys_subset_of(map, &[MIDDLEWARES_KEY]) => SectionShape::MiddlewareOnly,
        Some(map) => SectionShape::Routable(ProtocolSection { protocol, map }),
    }
}

/// The `routers` entry of a section.
#[derive(Debug, Clone, Copy)]
pub enum RoutersView<'a> {
    Absent,
    /// Present but not a mapping (including `null`).
    Invalid,
    Present(&'a Mapping),
}

/// A protocol section that is a mapping with more than middlewares.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolSection<'a> {
    pub protocol: Protocol,
    pub map: &'a Mapping,
}

impl<'a> ProtocolSection<'a> {
    pub fn has_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn routers(&self) -> RoutersView<'a> {
        match self.map.get(ROUTERS_KEY) {
            None => RoutersView::Absent,
            Some(Value::Mapping(map)) => RoutersView::Present(map),
            Some(_) => RoutersView::Invalid,
        }
    }

    /// The `services` mapping, if present and a mapping.
    pub fn services(&self) -> Option<&'a Mapping> {
        self.map.get(SERVICES_KEY).and_then(Value::as_mapping)
    }

    /// `services` is present, a mapping, and non-empty.
    pub fn has_services(&self) -> bool {
        self.services().is_some_and(|s| !s.is_empty())
    }

    pub fn service_defined(&self, name: &str) -> bool {
        self.services().is_some_and(|s| s.contains_key(name))
    }

    /// Routers in document order; empty unless `routers` is a mapping.
    pub fn routers_iter(self) -> impl Iterator<Item = RouterView<'a>> + 'a {
        let section = self;
        let routers = match self.routers() {
            RoutersView::Present(map) => Some(map),
            _ => None,
        };
        routers.into_iter().flat_map(move |map| {
            map.iter().map(move |(name, value)| RouterView {
                name: key_text(name),
                value,
                section,
            })
        })
    }

    pub fn references_non_internal_service(&self) -> bool {
        match self.routers() {
            RoutersView::Present(routers) => references_non_internal_service(routers),
            _ => false,
        }
    }
}

/// One entry of a section's `routers` mapping.
#[derive(Debug, Clone)]
pub struct RouterView<'a> {
    pub name: String,
    pub value: &'a Value,
    pub section: ProtocolSection<'a>,
}

impl<'a> RouterView<'a> {
    pub fn protocol(&self) -> Protocol {
        self.section.protocol
    }

    /// Router fields, if the router is a mapping.
    pub fn fields(&self) -> Option<&'a Mapping> {
        self.value.as_mapping()
    }

    pub fn rule(&self) -> Option<&'a Value> {
        self.fields().and_then(|f| f.get(RULE_KEY))
    }

    pub fn service(&self) -> ServiceRef<'a> {
        self.fields().map_or(ServiceRef::Absent, ServiceRef::of)
    }
}
